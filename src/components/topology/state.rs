use std::collections::HashMap;

use crate::model::topology::{
	BOARD_LINKS, CircuitNode, NodeLink, NodeStatus, board_nodes, power_delta, status_for_power,
	step_power,
};
use crate::runtime::RandomSource;

pub const NODE_RADIUS: f64 = 20.0;
pub const HIT_RADIUS: f64 = 24.0;

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	/// Node currently under the pointer.
	pub node: Option<usize>,
	/// Node the detail card is drawn for; kept through the fade-out after
	/// the pointer leaves.
	pub last_node: Option<usize>,
	pub highlight_t: f64,
}

pub struct TopologyState {
	pub nodes: Vec<CircuitNode>,
	pub links: Vec<(usize, usize)>,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub flow_time: f64,
}

impl TopologyState {
	pub fn new(width: f64, height: f64) -> Self {
		let nodes = board_nodes();
		let links = resolve_links(&nodes, &BOARD_LINKS);
		TopologyState {
			nodes,
			links,
			hover: HoverState::default(),
			width,
			height,
			flow_time: 0.0,
		}
	}

	/// Pixel position of a node on the current canvas.
	pub fn node_px(&self, node: &CircuitNode) -> (f64, f64) {
		(node.x / 100.0 * self.width, node.y / 100.0 * self.height)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let mut found = None;
		for (idx, node) in self.nodes.iter().enumerate() {
			let (x, y) = self.node_px(node);
			let (dx, dy) = (x - sx, y - sy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(idx);
			}
		}
		found
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.hover.node == node {
			return;
		}
		self.hover.node = node;
		if node.is_some() {
			self.hover.last_node = node;
		}
	}

	/// Advance animation clocks; called once per rendered frame.
	pub fn tick(&mut self, dt: f64) {
		self.flow_time += dt;
		let (target, speed) = if self.hover.node.is_some() {
			(1.0, 1.8)
		} else {
			(0.0, 1.26)
		};
		self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt;
		if self.hover.node.is_none() && self.hover.highlight_t < 0.01 {
			self.hover.highlight_t = 0.0;
			self.hover.last_node = None;
		}
	}

	/// Random-walk every node's power and rederive its status.
	pub fn resample_power(&mut self, rng: &RandomSource) {
		for node in &mut self.nodes {
			node.power = step_power(node.power, power_delta(rng));
			node.status = status_for_power(node.power);
		}
	}

	pub fn online_count(&self) -> usize {
		self.nodes
			.iter()
			.filter(|n| n.status == NodeStatus::Online)
			.count()
	}
}

/// Resolve link endpoints to node indices.  A link naming an unknown node id
/// is dropped; the rest of the board still draws.
pub fn resolve_links(nodes: &[CircuitNode], links: &[NodeLink]) -> Vec<(usize, usize)> {
	let id_to_idx: HashMap<&str, usize> = nodes
		.iter()
		.enumerate()
		.map(|(idx, node)| (node.id, idx))
		.collect();

	links
		.iter()
		.filter_map(
			|link| match (id_to_idx.get(link.from), id_to_idx.get(link.to)) {
				(Some(&from), Some(&to)) => Some((from, to)),
				_ => None,
			},
		)
		.collect()
}

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{NODE_RADIUS, TopologyState};

const BOARD_BG: &str = "#0b1220";
const GRID_STEP: f64 = 20.0;
/// Seconds per pulse cycle, shared by links and ping rings.
const PULSE_PERIOD: f64 = 2.0;
/// Seconds of pulse offset between consecutive links.
const LINK_STAGGER: f64 = 0.2;

fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

pub fn render(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BOARD_BG);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	draw_grid(state, ctx);
	draw_links(state, ctx);
	draw_nodes(state, ctx);
	draw_corners(state, ctx);
	draw_hover_card(state, ctx);
}

fn draw_grid(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_stroke_style_str("rgba(56, 189, 248, 0.08)");
	ctx.set_line_width(0.5);
	let mut x = 0.0;
	while x <= state.width {
		ctx.begin_path();
		ctx.move_to(x, 0.0);
		ctx.line_to(x, state.height);
		ctx.stroke();
		x += GRID_STEP;
	}
	let mut y = 0.0;
	while y <= state.height {
		ctx.begin_path();
		ctx.move_to(0.0, y);
		ctx.line_to(state.width, y);
		ctx.stroke();
		y += GRID_STEP;
	}
}

fn draw_links(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	let dash = js_sys::Array::of2(&JsValue::from_f64(8.0), &JsValue::from_f64(4.0));
	for (idx, &(from, to)) in state.links.iter().enumerate() {
		let (x1, y1) = state.node_px(&state.nodes[from]);
		let (x2, y2) = state.node_px(&state.nodes[to]);

		// Each link pulses on the shared clock, offset by its index.
		let phase = (state.flow_time - idx as f64 * LINK_STAGGER) * 2.0 * PI / PULSE_PERIOD;
		let alpha = 0.28 + 0.18 * phase.sin();

		ctx.set_stroke_style_str(&format!("rgba(56, 189, 248, {alpha:.3})"));
		ctx.set_line_width(2.0);
		let _ = ctx.set_line_dash(&dash);
		ctx.set_line_dash_offset(-(state.flow_time * 18.0) % 12.0);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	let ping = (state.flow_time % PULSE_PERIOD) / PULSE_PERIOD;

	for node in &state.nodes {
		let (x, y) = state.node_px(node);
		let color = node.status.color();

		// Expanding ping ring that fades as it grows.
		ctx.set_global_alpha(0.25 * (1.0 - ping));
		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS * (1.0 + ping), 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.stroke();
		ctx.set_global_alpha(1.0);

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str("rgba(11, 18, 32, 0.9)");
		ctx.fill();
		ctx.set_stroke_style_str(color);
		ctx.set_line_width(2.0);
		ctx.stroke();

		ctx.set_fill_style_str(color);
		ctx.set_font("bold 11px monospace");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(node.icon.monogram(), x, y);
	}
	ctx.set_text_align("start");
	ctx.set_text_baseline("alphabetic");
}

fn draw_corners(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	ctx.set_font("10px monospace");
	ctx.set_fill_style_str("rgba(56, 189, 248, 0.45)");
	let _ = ctx.fill_text("NODE MAP", 8.0, 14.0);
	ctx.set_text_align("right");
	let _ = ctx.fill_text("v2.3.1", state.width - 8.0, 14.0);
	ctx.set_text_align("start");
	let _ = ctx.fill_text(
		&format!("SYS: {}/{}", state.online_count(), state.nodes.len()),
		8.0,
		state.height - 8.0,
	);

	let blink = 0.55 + 0.45 * (state.flow_time * 2.0 * PI / PULSE_PERIOD).sin();
	ctx.set_global_alpha(blink);
	ctx.set_fill_style_str("#22c55e");
	ctx.set_text_align("right");
	let _ = ctx.fill_text("\u{25cf} ACTIVE", state.width - 8.0, state.height - 8.0);
	ctx.set_text_align("start");
	ctx.set_global_alpha(1.0);
}

fn draw_hover_card(state: &TopologyState, ctx: &CanvasRenderingContext2d) {
	let t = ease_out_cubic(state.hover.highlight_t);
	if t < 0.01 {
		return;
	}
	let Some(idx) = state.hover.last_node else {
		return;
	};
	let node = &state.nodes[idx];
	let (x, y) = state.node_px(node);

	// Soft glow behind the hovered marker.
	let glow_radius = NODE_RADIUS * (1.8 + 0.6 * t);
	if let Ok(gradient) = ctx.create_radial_gradient(x, y, NODE_RADIUS * 0.3, x, y, glow_radius) {
		let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {:.3})", 0.3 * t));
		let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
		ctx.begin_path();
		let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
	}

	// Detail card beside the node, flipped when it would overflow the edge.
	let (card_w, card_h) = (170.0, 62.0);
	let cx = if x + NODE_RADIUS + 12.0 + card_w > state.width {
		x - NODE_RADIUS - 12.0 - card_w
	} else {
		x + NODE_RADIUS + 12.0
	};
	let cy = (y - card_h / 2.0).clamp(6.0, (state.height - card_h - 6.0).max(6.0));

	ctx.set_global_alpha(t);
	ctx.set_fill_style_str("rgba(15, 23, 42, 0.95)");
	ctx.fill_rect(cx, cy, card_w, card_h);
	ctx.set_stroke_style_str("rgba(56, 189, 248, 0.35)");
	ctx.set_line_width(1.0);
	ctx.stroke_rect(cx, cy, card_w, card_h);

	ctx.set_fill_style_str("#e2e8f0");
	ctx.set_font("bold 12px monospace");
	let _ = ctx.fill_text(node.name, cx + 10.0, cy + 18.0);
	ctx.set_font("11px monospace");
	ctx.set_fill_style_str("#94a3b8");
	let _ = ctx.fill_text("Status:", cx + 10.0, cy + 36.0);
	let _ = ctx.fill_text("Power:", cx + 10.0, cy + 52.0);
	ctx.set_fill_style_str(node.status.color());
	let _ = ctx.fill_text(node.status.label(), cx + 70.0, cy + 36.0);
	let _ = ctx.fill_text(&format!("{:.1}%", node.power), cx + 70.0, cy + 52.0);
	ctx.set_global_alpha(1.0);
}

//! Circuit-board topology model: fixed nodes and links, random-walk power.

use crate::runtime::RandomSource;

pub const POWER_FLOOR: f64 = 60.0;
pub const POWER_CEILING: f64 = 100.0;
/// Below this power a node reports `Warning`.
pub const WARNING_THRESHOLD: f64 = 75.0;
/// Maximum power movement per resample, in either direction.
pub const POWER_STEP: f64 = 2.5;

/// Health of one subsystem node, derived from its power level.
///
/// `Offline` is defined for manual overrides but unreachable while power is
/// clamped at [`POWER_FLOOR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeStatus {
	Online,
	Warning,
	Offline,
}

impl NodeStatus {
	pub fn label(self) -> &'static str {
		match self {
			NodeStatus::Online => "ONLINE",
			NodeStatus::Warning => "WARNING",
			NodeStatus::Offline => "OFFLINE",
		}
	}

	/// Canvas stroke/fill color.
	pub fn color(self) -> &'static str {
		match self {
			NodeStatus::Online => "#22c55e",
			NodeStatus::Warning => "#f59e0b",
			NodeStatus::Offline => "#ef4444",
		}
	}
}

/// Glyph family drawn inside a node marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
	Power,
	Comms,
	Hvac,
	Sensors,
	Control,
	Security,
}

impl IconKind {
	/// Two-letter monogram drawn in the node circle.
	pub fn monogram(self) -> &'static str {
		match self {
			IconKind::Power => "PW",
			IconKind::Comms => "CM",
			IconKind::Hvac => "HV",
			IconKind::Sensors => "SN",
			IconKind::Control => "CT",
			IconKind::Security => "SC",
		}
	}
}

/// One subsystem on the board.  Position is in [0,100]x[0,100] percentage
/// space; the canvas maps it to pixels.
#[derive(Clone, Debug)]
pub struct CircuitNode {
	pub id: &'static str,
	pub name: &'static str,
	pub icon: IconKind,
	pub status: NodeStatus,
	pub power: f64,
	pub x: f64,
	pub y: f64,
}

/// A visual connection between two subsystems.  Decoration, not data flow.
#[derive(Clone, Copy, Debug)]
pub struct NodeLink {
	pub from: &'static str,
	pub to: &'static str,
}

/// The six fixed subsystems with their boot power levels.
pub fn board_nodes() -> Vec<CircuitNode> {
	vec![
		CircuitNode {
			id: "power",
			name: "Power Core",
			icon: IconKind::Power,
			status: NodeStatus::Online,
			power: 98.0,
			x: 20.0,
			y: 50.0,
		},
		CircuitNode {
			id: "comms",
			name: "Communications",
			icon: IconKind::Comms,
			status: NodeStatus::Online,
			power: 87.0,
			x: 40.0,
			y: 30.0,
		},
		CircuitNode {
			id: "hvac",
			name: "HVAC System",
			icon: IconKind::Hvac,
			status: NodeStatus::Online,
			power: 92.0,
			x: 60.0,
			y: 50.0,
		},
		CircuitNode {
			id: "sensors",
			name: "Sensor Array",
			icon: IconKind::Sensors,
			status: NodeStatus::Warning,
			power: 73.0,
			x: 40.0,
			y: 70.0,
		},
		CircuitNode {
			id: "control",
			name: "Control Unit",
			icon: IconKind::Control,
			status: NodeStatus::Online,
			power: 95.0,
			x: 80.0,
			y: 50.0,
		},
		CircuitNode {
			id: "security",
			name: "Security",
			icon: IconKind::Security,
			status: NodeStatus::Online,
			power: 100.0,
			x: 60.0,
			y: 30.0,
		},
	]
}

/// Fixed board wiring.  Endpoints reference node ids; a link whose endpoint
/// is absent from the node set is skipped at resolution time.
pub const BOARD_LINKS: [NodeLink; 7] = [
	NodeLink {
		from: "power",
		to: "comms",
	},
	NodeLink {
		from: "power",
		to: "hvac",
	},
	NodeLink {
		from: "power",
		to: "control",
	},
	NodeLink {
		from: "comms",
		to: "security",
	},
	NodeLink {
		from: "hvac",
		to: "sensors",
	},
	NodeLink {
		from: "control",
		to: "security",
	},
	NodeLink {
		from: "sensors",
		to: "control",
	},
];

/// Node health as a pure function of power.  No input maps to `Offline`.
pub fn status_for_power(power: f64) -> NodeStatus {
	if power < WARNING_THRESHOLD {
		NodeStatus::Warning
	} else {
		NodeStatus::Online
	}
}

/// Uniform random-walk step in `[-POWER_STEP, POWER_STEP]`.
pub fn power_delta(rng: &RandomSource) -> f64 {
	rng.gen_range(-POWER_STEP..=POWER_STEP)
}

/// Apply one walk step, clamped to the operating band.
pub fn step_power(power: f64, delta: f64) -> f64 {
	(power + delta).clamp(POWER_FLOOR, POWER_CEILING)
}

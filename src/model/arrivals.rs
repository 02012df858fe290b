//! Mock arrival boards for the two line directions.

use crate::runtime::RandomSource;

/// Which side of the line a board covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
	Upline,
	Downline,
}

impl Direction {
	pub fn label(self) -> &'static str {
		match self {
			Direction::Upline => "Upline Trains",
			Direction::Downline => "Downline Trains",
		}
	}

	fn key(self) -> &'static str {
		match self {
			Direction::Upline => "upline",
			Direction::Downline => "downline",
		}
	}

	/// Fixed roster of (destination, origin location) pairs for this
	/// direction.  Display order equals roster order.
	pub fn roster(self) -> &'static [(&'static str, &'static str)] {
		match self {
			Direction::Upline => &[
				("Train #A402", "Central Station"),
				("Train #B305", "North Terminal"),
				("Train #C118", "Airport"),
			],
			Direction::Downline => &[
				("Train #D201", "South Harbor"),
				("Train #E504", "West Junction"),
				("Train #F307", "East End"),
			],
		}
	}
}

/// Service state of one arrival entry.
///
/// `Offline` is never drawn by [`sample_board`]; the variant exists for
/// manual entry and a future widening of the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrivalStatus {
	OnTime,
	Delayed,
	Offline,
}

impl ArrivalStatus {
	pub fn label(self) -> &'static str {
		match self {
			ArrivalStatus::OnTime => "ON-TIME",
			ArrivalStatus::Delayed => "DELAYED",
			ArrivalStatus::Offline => "OFFLINE",
		}
	}

	pub fn badge_class(self) -> &'static str {
		match self {
			ArrivalStatus::OnTime => "badge badge--online",
			ArrivalStatus::Delayed => "badge badge--delayed",
			ArrivalStatus::Offline => "badge badge--offline",
		}
	}
}

/// One row of an arrival board.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrivalRecord {
	pub id: String,
	pub destination: &'static str,
	pub origin: &'static str,
	pub eta: String,
	pub status: ArrivalStatus,
	pub platform: u32,
	pub distance_km: f64,
}

// On-time appears twice so delays stay the minority outcome.
const STATUS_POOL: [ArrivalStatus; 3] = [
	ArrivalStatus::OnTime,
	ArrivalStatus::OnTime,
	ArrivalStatus::Delayed,
];

/// Rebuild the full board for `direction`.  ETA and distance are fixed per
/// index; status and platform are drawn fresh on every call.
pub fn sample_board(direction: Direction, rng: &RandomSource) -> Vec<ArrivalRecord> {
	direction
		.roster()
		.iter()
		.enumerate()
		.map(|(i, &(destination, origin))| ArrivalRecord {
			id: format!("{}-{}", direction.key(), i + 1),
			destination,
			origin,
			eta: format!("{} min", 3 + i * 5),
			status: *rng.choose(&STATUS_POOL),
			platform: rng.gen_range(1..=4),
			distance_km: 2.5 * (i as f64 + 1.0),
		})
		.collect()
}

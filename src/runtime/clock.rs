//! Injectable wall-clock capability and display formatting.

use std::sync::Arc;

const WEEKDAYS: [&str; 7] = [
	"Sunday",
	"Monday",
	"Tuesday",
	"Wednesday",
	"Thursday",
	"Friday",
	"Saturday",
];

const MONTHS: [&str; 12] = [
	"January",
	"February",
	"March",
	"April",
	"May",
	"June",
	"July",
	"August",
	"September",
	"October",
	"November",
	"December",
];

/// A broken-down local-time instant as read from the host clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReading {
	pub year: u32,
	/// 0-based month index, January = 0.
	pub month: u32,
	/// Day of the month, 1-based.
	pub day: u32,
	/// 0-based weekday index, Sunday = 0.
	pub weekday: u32,
	pub hours: u32,
	pub minutes: u32,
	pub seconds: u32,
}

impl ClockReading {
	/// Zero-padded 24-hour time, e.g. `"08:05:09"`.
	pub fn time_hms(&self) -> String {
		format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
	}

	/// Long date line, e.g. `"Friday, August 7, 2026"`.
	pub fn long_date(&self) -> String {
		let weekday = WEEKDAYS[self.weekday as usize % WEEKDAYS.len()];
		let month = MONTHS[self.month as usize % MONTHS.len()];
		format!("{}, {} {}, {}", weekday, month, self.day, self.year)
	}
}

/// Reads the current instant.  Implemented by the browser clock in production
/// and by a pinned instant in tests.
pub trait WallClock: Send + Sync {
	fn now(&self) -> ClockReading;
}

/// Local time via `js_sys::Date`.
pub struct BrowserClock;

impl WallClock for BrowserClock {
	fn now(&self) -> ClockReading {
		let date = js_sys::Date::new_0();
		ClockReading {
			year: date.get_full_year(),
			month: date.get_month(),
			day: date.get_date(),
			weekday: date.get_day(),
			hours: date.get_hours(),
			minutes: date.get_minutes(),
			seconds: date.get_seconds(),
		}
	}
}

/// A clock pinned to one instant, for deterministic tests.
pub struct FixedClock(pub ClockReading);

impl WallClock for FixedClock {
	fn now(&self) -> ClockReading {
		self.0
	}
}

/// Shared handle to the wall-clock capability.
#[derive(Clone)]
pub struct ClockSource {
	inner: Arc<dyn WallClock>,
}

impl ClockSource {
	pub fn browser() -> Self {
		ClockSource {
			inner: Arc::new(BrowserClock),
		}
	}

	pub fn fixed(reading: ClockReading) -> Self {
		ClockSource {
			inner: Arc::new(FixedClock(reading)),
		}
	}

	pub fn now(&self) -> ClockReading {
		self.inner.now()
	}
}

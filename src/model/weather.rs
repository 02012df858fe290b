//! Mock weather reading and its resampler.

use crate::runtime::RandomSource;

/// Sky condition shown on the weather panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WeatherCondition {
	Clear,
	PartlyCloudy,
	Cloudy,
	LightRain,
}

impl WeatherCondition {
	pub const ALL: [WeatherCondition; 4] = [
		Self::Clear,
		Self::PartlyCloudy,
		Self::Cloudy,
		Self::LightRain,
	];

	pub fn label(self) -> &'static str {
		match self {
			WeatherCondition::Clear => "Clear",
			WeatherCondition::PartlyCloudy => "Partly Cloudy",
			WeatherCondition::Cloudy => "Cloudy",
			WeatherCondition::LightRain => "Light Rain",
		}
	}
}

/// One wholesale weather snapshot.  Replaced in full on every resample; no
/// history is kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeatherReading {
	pub temperature_c: i32,
	pub condition: WeatherCondition,
	pub humidity_pct: i32,
	pub wind_kmh: i32,
}

impl Default for WeatherReading {
	fn default() -> Self {
		WeatherReading {
			temperature_c: 22,
			condition: WeatherCondition::PartlyCloudy,
			humidity_pct: 65,
			wind_kmh: 12,
		}
	}
}

/// Draw a fresh reading.  All four fields are sampled independently.
pub fn sample_weather(rng: &RandomSource) -> WeatherReading {
	WeatherReading {
		temperature_c: rng.gen_range(18.0..28.0_f64).round() as i32,
		condition: *rng.choose(&WeatherCondition::ALL),
		humidity_pct: rng.gen_range(50.0..80.0_f64).round() as i32,
		wind_kmh: rng.gen_range(5.0..25.0_f64).round() as i32,
	}
}

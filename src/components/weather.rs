use std::time::Duration;

use leptos::prelude::*;

use super::panel::{Panel, PanelDensity};
use crate::model::weather::{WeatherCondition, WeatherReading, sample_weather};
use crate::runtime::{RandomSource, scoped_interval};

/// Refresh cadence: five minutes.
const RESAMPLE_PERIOD: Duration = Duration::from_secs(300);

/// Mock weather conditions, replaced wholesale on each resample.
#[component]
pub fn WeatherPanel() -> impl IntoView {
	let rng = expect_context::<RandomSource>();
	let reading = RwSignal::new(WeatherReading::default());

	scoped_interval(RESAMPLE_PERIOD, move || {
		reading.set(sample_weather(&rng));
	});

	view! {
		<Panel title="Weather Conditions" density=PanelDensity::Compact>
			<div class="weather-main">
				<div>
					<div class="weather-temp">{move || format!("{}°C", reading.get().temperature_c)}</div>
					<div class="weather-condition">{move || reading.get().condition.label()}</div>
				</div>
				<div class="weather-icon">{move || condition_icon(reading.get().condition)}</div>
			</div>
			<div class="weather-detail">
				<div>
					<div class="detail-label">"Humidity"</div>
					<div class="detail-value">{move || format!("{}%", reading.get().humidity_pct)}</div>
				</div>
				<div>
					<div class="detail-label">"Wind"</div>
					<div class="detail-value">{move || format!("{} km/h", reading.get().wind_kmh)}</div>
				</div>
			</div>
		</Panel>
	}
}

/// Condition to icon mapping; unmatched conditions fall back to the plain
/// cloud.
fn condition_icon(condition: WeatherCondition) -> AnyView {
	match condition {
		WeatherCondition::Clear => view! {
			<svg class="icon icon--accent" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
				<circle cx="12" cy="12" r="4" />
				<path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
			</svg>
		}
		.into_any(),
		WeatherCondition::Cloudy => view! {
			<svg class="icon icon--muted" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
				<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />
			</svg>
		}
		.into_any(),
		WeatherCondition::LightRain => view! {
			<svg class="icon icon--secondary" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
				<path d="M17.5 17H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 0 1 0 9Z" />
				<path d="M8 19v2M12 20v2M16 19v2" />
			</svg>
		}
		.into_any(),
		_ => view! {
			<svg class="icon icon--primary" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
				<path d="M17.5 19H9a7 7 0 1 1 6.71-9h1.79a4.5 4.5 0 1 1 0 9Z" />
			</svg>
		}
		.into_any(),
	}
}

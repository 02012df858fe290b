use std::time::Duration;

use leptos::prelude::*;

use super::panel::Panel;
use crate::runtime::{ClockSource, scoped_interval};

/// Live wall-clock readout, refreshed once per second.
#[component]
pub fn ClockPanel() -> impl IntoView {
	let clock = expect_context::<ClockSource>();
	let reading = RwSignal::new(clock.now());

	scoped_interval(Duration::from_secs(1), move || {
		reading.set(clock.now());
	});

	view! {
		<Panel title="System Time">
			<div class="clock-time">{move || reading.get().time_hms()}</div>
			<div class="clock-date">{move || reading.get().long_date()}</div>
		</Panel>
	}
}

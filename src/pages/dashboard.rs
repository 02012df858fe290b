use leptos::prelude::*;

use crate::components::{ArrivalsPanel, ClockPanel, TopologyPanel, WeatherPanel};
use crate::model::arrivals::Direction;
use crate::runtime::ClockSource;

/// Full-page dashboard: clock, weather, both arrival boards, and the
/// circuit-board topology view.  Holds no state of its own beyond
/// composition.
#[component]
pub fn Dashboard() -> impl IntoView {
	let clock = expect_context::<ClockSource>();
	// Footer shows the time of the last full-page render, not a live clock.
	let rendered_at = clock.now().time_hms();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="dashboard">
				<header class="dashboard__header">
					<svg
						class="icon icon--primary pulse"
						viewBox="0 0 24 24"
						fill="none"
						stroke="currentColor"
						stroke-width="2"
					>
						<path d="M22 12h-4l-3 9L9 3l-3 9H2" />
					</svg>
					<div>
						<h1>"CABIN SIDE CONTROL"</h1>
						<p>"Real-time Transit Monitoring System"</p>
					</div>
				</header>

				<div class="dashboard__row">
					<ClockPanel />
					<WeatherPanel />
				</div>

				<div class="dashboard__row">
					<ArrivalsPanel direction=Direction::Upline />
					<ArrivalsPanel direction=Direction::Downline />
				</div>

				<TopologyPanel />

				<footer class="dashboard__footer">
					<p>
						"System Status: " <span class="status-online">"OPERATIONAL"</span>
						" \u{2022} Last Update: " {rendered_at}
					</p>
				</footer>
			</div>
		</ErrorBoundary>
	}
}

use std::time::Duration;

use leptos::prelude::*;

use super::panel::{Panel, PanelDensity};
use crate::model::arrivals::{ArrivalRecord, Direction, sample_board};
use crate::runtime::{RandomSource, scoped_interval};

/// Refresh cadence: fifteen seconds.
const RESAMPLE_PERIOD: Duration = Duration::from_secs(15);

/// Arrival board for one direction.  The whole list is rebuilt on mount and
/// on every resample tick; display order equals roster order.
#[component]
pub fn ArrivalsPanel(direction: Direction) -> impl IntoView {
	let rng = expect_context::<RandomSource>();
	let records = RwSignal::new(sample_board(direction, &rng));

	scoped_interval(RESAMPLE_PERIOD, move || {
		records.set(sample_board(direction, &rng));
	});

	view! {
		<Panel title=direction.label() density=PanelDensity::Compact>
			<div class="arrival-list">
				{move || records.get().into_iter().map(arrival_row).collect_view()}
			</div>
		</Panel>
	}
}

fn arrival_row(record: ArrivalRecord) -> impl IntoView {
	view! {
		<div class="arrival-row">
			<div class="arrival-head">
				<div>
					<div class="arrival-destination">{record.destination}</div>
					<div class="arrival-origin">{format!("Location: {}", record.origin)}</div>
				</div>
				<span class=record.status.badge_class()>{record.status.label()}</span>
			</div>
			<div class="arrival-detail">
				<div>
					<div class="detail-label">"ETA"</div>
					<div class="detail-value">{record.eta}</div>
				</div>
				<div>
					<div class="detail-label">"Platform"</div>
					<div class="detail-value">{record.platform}</div>
				</div>
				<div>
					<div class="detail-label">"Distance"</div>
					<div class="detail-value">{format!("{:.1} km", record.distance_km)}</div>
				</div>
			</div>
		</div>
	}
}

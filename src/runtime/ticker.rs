//! Repeating timers scoped to a component's mounted lifetime.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_interval_with_handle;
use leptos::prelude::on_cleanup;

/// Run `f` every `period` until the current reactive owner is disposed.
///
/// The interval is acquired when the owning component mounts and released
/// unconditionally on unmount, so no tick can fire against a torn-down panel.
pub fn scoped_interval(period: Duration, f: impl Fn() + 'static) {
	let handle = set_interval_with_handle(f, period).expect("interval registration");
	on_cleanup(move || handle.clear());
}

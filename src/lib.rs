//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info};

// Pulled in for its "js" feature so `rand` can reach entropy on wasm32.
use getrandom as _;

// Modules
mod components;
mod model;
mod pages;
mod runtime;

#[cfg(test)]
mod tests;

// Top-Level pages
use crate::pages::dashboard::Dashboard;
use crate::pages::not_found::NotFound;
use crate::runtime::{ClockSource, RandomSource};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// An app router which renders the dashboard and handles 404's
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();

	// Ambient capabilities.  Panels read the wall clock and draw random
	// numbers through these handles; tests substitute fixed sources.
	provide_context(ClockSource::browser());
	provide_context(RandomSource::from_entropy());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text="Cabin Side Control" />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Router>
			<Routes fallback=|| view! { <NotFound /> }>
				<Route path=path!("/") view=Dashboard />
			</Routes>
		</Router>
	}
}

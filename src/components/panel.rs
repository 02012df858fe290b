use leptos::prelude::*;

/// Vertical spacing preset for a panel card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelDensity {
	/// Roomier padding for headline panels.
	#[default]
	Comfortable,
	/// Tighter padding for list-heavy panels.
	Compact,
}

impl PanelDensity {
	fn class(self) -> &'static str {
		match self {
			PanelDensity::Comfortable => "panel",
			PanelDensity::Compact => "panel panel--compact",
		}
	}
}

/// Shared card chrome for every dashboard panel.
#[component]
pub fn Panel(
	#[prop(into)] title: String,
	#[prop(optional)] density: PanelDensity,
	children: Children,
) -> impl IntoView {
	view! {
		<section class=density.class()>
			<header class="panel__title">{title}</header>
			<div class="panel__body">{children()}</div>
		</section>
	}
}

use leptos::prelude::*;

/// 404 fallback page.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div class="not-found">
			<h1>"404"</h1>
			<p>"This board does not exist."</p>
			<a href="/">"Back to the control board"</a>
		</div>
	}
}

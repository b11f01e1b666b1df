use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::page_title;

/// Fallback for any path without a route.
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<Title text=page_title("Not Found") />
		<div class="page not-found">
			<h1 class="page-title red neon-glow">"404"</h1>
			<p class="page-lead">"This page is not part of the syllabus."</p>
			<A href="/" attr:class="cta">
				"Return home"
			</A>
		</div>
	}
}

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::concept_map::ConceptMap;
use crate::config::page_title;
use crate::content::CONCEPTS;

/// The concept network followed by one card per concept.
#[component]
pub fn Concepts() -> impl IntoView {
	view! {
		<Title text=page_title("Concepts") />
		<div class="page">
			<h1 class="page-title purple neon-glow">"Philosophical Concepts"</h1>
			<p class="page-lead">
				"How the course's theorists, their ideas and the games connect. \
				 Filter by category or click a node to read more."
			</p>

			<ConceptMap />

			<section class="card-grid">
				{CONCEPTS
					.iter()
					.map(|c| {
						let color = c.color.hex();
						view! {
							<article class="card" style:border-color=color>
								<h3 style:color=color>{c.title}</h3>
								<p class="card-subtitle">{c.subtitle}</p>
								<p class="muted">{c.theorist}</p>
								<p>{c.description}</p>
								<p class="key-idea">
									<span class="detail-key">"Key idea: "</span>
									{c.key_idea}
								</p>
								<div class="tag-row">
									{c
										.games
										.iter()
										.map(|g| view! { <span class="tag">{*g}</span> })
										.collect_view()}
								</div>
							</article>
						}
					})
					.collect_view()}
			</section>
		</div>
	}
}

use leptos::prelude::*;

use super::graph::{ConceptNode, Entity};

const GAME_THEME_LIMIT: usize = 4;

/// Category-specific facts about the selected node.
#[component]
pub fn DetailPanel(node: ConceptNode, on_close: Callback<()>) -> impl IntoView {
	let color = node.color.hex();
	let category = node.category();

	let body = match node.entity {
		Entity::Theorist(t) => view! {
			<div class="detail-body">
				<p class="detail-key">"Key Work:"</p>
				<p>{t.work}</p>
				<p class="detail-key">"Key Ideas:"</p>
				<ul class="detail-ideas">
					{t
						.key_ideas
						.iter()
						.map(|idea| {
							view! {
								<li>
									<span style:color=color>"\u{25b8} "</span>
									{*idea}
								</li>
							}
						})
						.collect_view()}
				</ul>
				{t.quote.map(|q| {
					view! {
						<blockquote class="detail-quote" style:border-color=color>
							"\u{201c}"{q}"\u{201d}"
						</blockquote>
					}
				})}
			</div>
		}
		.into_any(),
		Entity::Concept(c) => view! {
			<div class="detail-body">
				<p class="detail-key">"Theorist:"</p>
				<p>{c.theorist}</p>
				<p class="detail-key">"Description:"</p>
				<p>{c.description}</p>
				<p class="detail-key">"Key Idea:"</p>
				<p>{c.key_idea}</p>
			</div>
		}
		.into_any(),
		Entity::Game(g) => view! {
			<div class="detail-body">
				<p class="detail-key">"Developer:"</p>
				<p>{format!("{} ({})", g.developer, g.year)}</p>
				<p class="detail-key">"Key Themes:"</p>
				<div class="tag-row">
					{g
						.themes
						.iter()
						.take(GAME_THEME_LIMIT)
						.map(|theme| view! { <span class="tag" style:color=color>{*theme}</span> })
						.collect_view()}
				</div>
				<p class="detail-key">"Description:"</p>
				<p>{g.description}</p>
			</div>
		}
		.into_any(),
	};

	view! {
		<section class="detail-panel" style:border-color=color>
			<button
				class="detail-close"
				style:color=color
				aria-label="Close details"
				on:click=move |_| on_close.run(())
			>
				"\u{2715}"
			</button>
			<header class="detail-header">
				<div class="detail-glyph" style:border-color=color>
					{category.glyph()}
				</div>
				<div>
					<h3 style:color=color>{node.label}</h3>
					<p class="detail-category">{category.name()}</p>
				</div>
			</header>
			{body}
		</section>
	}
}

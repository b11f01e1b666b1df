use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::page_title;
use crate::content::{THEORISTS, Theorist, concepts_of};

#[component]
fn TheoristCard(theorist: &'static Theorist) -> impl IntoView {
	let color = theorist.color.hex();
	let has_concepts = concepts_of(theorist.id).next().is_some();

	view! {
		<article class="card theorist-card" id=theorist.id style:border-color=color>
			<h3 style:color=color>{theorist.name}</h3>
			<p class="card-subtitle">{theorist.work}</p>
			<ul class="detail-ideas">
				{theorist
					.key_ideas
					.iter()
					.map(|idea| view! { <li>{*idea}</li> })
					.collect_view()}
			</ul>
			{theorist.quote.map(|q| {
				view! {
					<blockquote class="detail-quote" style:border-color=color>
						"\u{201c}"{q}"\u{201d}"
					</blockquote>
				}
			})}
			<p>{theorist.application}</p>
			{has_concepts.then(|| view! { <p class="detail-key">"Concepts"</p> })}
			<div class="tag-row">
				{concepts_of(theorist.id)
					.map(|c| view! { <span class="tag" style:color=c.color.hex()>{c.title}</span> })
					.collect_view()}
			</div>
			<p class="muted">{theorist.games.join(" \u{2022} ")}</p>
		</article>
	}
}

/// Theorist cards with their works, ideas and the concepts they anchor.
#[component]
pub fn Frameworks() -> impl IntoView {
	view! {
		<Title text=page_title("Frameworks") />
		<div class="page">
			<h1 class="page-title gold neon-glow">"Theoretical Frameworks"</h1>
			<p class="page-lead">
				"The scholars whose arguments the seminar brings to bear on each game."
			</p>
			<section class="card-grid">
				{THEORISTS.iter().map(|t| view! { <TheoristCard theorist=t /> }).collect_view()}
			</section>
		</div>
	}
}

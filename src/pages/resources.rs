use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::page_title;
use crate::content::{RECOMMENDED_BOOKS, RESOURCE_GROUPS, Resource};

fn resource_title(resource: &Resource) -> AnyView {
	match resource.url {
		Some(url) => view! {
			<a href=url target="_blank" rel="noopener noreferrer">
				{resource.title}" \u{2197}"
			</a>
		}
		.into_any(),
		None => view! { <span>{resource.title}</span> }.into_any(),
	}
}

/// Journals, research tools and further reading.
#[component]
pub fn Resources() -> impl IntoView {
	view! {
		<Title text=page_title("Resources") />
		<div class="page">
			<h1 class="page-title purple neon-glow">"Research Resources"</h1>
			<div class="card-grid two">
				{RESOURCE_GROUPS
					.iter()
					.map(|group| {
						let color = group.color.hex();
						view! {
							<section class="card" style:border-color=color>
								<h2 class="section-title" style:color=color>{group.category}</h2>
								<ul class="resource-list">
									{group
										.items
										.iter()
										.map(|r| {
											view! {
												<li>
													{resource_title(r)}
													<p class="muted">{r.description}</p>
												</li>
											}
										})
										.collect_view()}
								</ul>
							</section>
						}
					})
					.collect_view()}
			</div>

			<section>
				<h2 class="section-title gold">"Recommended Books"</h2>
				<ul class="books">
					{RECOMMENDED_BOOKS
						.iter()
						.map(|b| {
							view! {
								<li>
									<em>{b.title}</em>
									{format!(" \u{2014} {} ({}). ", b.author, b.year)}
									<span class="muted">{b.note}</span>
								</li>
							}
						})
						.collect_view()}
				</ul>
			</section>
		</div>
	}
}

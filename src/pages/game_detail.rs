use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use log::debug;

use crate::components::quote_box::QuoteBox;
use crate::config::page_title;
use crate::content::{self, AnalysisSection, Game, PAPER_QUOTES, PaperMetadata};

const APPLIED_IDEAS: usize = 2;

#[component]
fn PaperAbstract(paper: &'static PaperMetadata, color: &'static str) -> impl IntoView {
	view! {
		<section class="panel" style:border-left-color=color>
			<h2 class="section-title" style:color=color>"Research Paper"</h2>
			<h3>{paper.title}</h3>
			<p class="muted">{paper.abstract_text}</p>
			<div class="tag-row">
				{paper
					.keywords
					.iter()
					.map(|k| view! { <span class="tag" style:color=color>{*k}</span> })
					.collect_view()}
			</div>
			<details class="paper-excerpts">
				<summary>"Excerpts"</summary>
				{PAPER_QUOTES.iter().map(|q| view! { <QuoteBox quote=*q /> }).collect_view()}
			</details>
		</section>
	}
}

/// Body of the selected analysis tab: the paper quote, the analysis and the
/// framework box of the section's theorist.
#[component]
fn SectionAnalysis(section: &'static AnalysisSection, game: &'static Game) -> impl IntoView {
	let color = game.color.hex();
	let theorist = section.theorist.and_then(|id| content::theorist(id).ok());

	view! {
		<article class="panel analysis" style:border-color=color>
			<h2 class="section-title" style:color=color>{section.heading}</h2>
			{section.quote.map(|q| view! { <QuoteBox quote=q color=game.color /> })}
			<h3>"Philosophical Analysis"</h3>
			<p class="muted">{section.body}</p>
			{theorist.map(|t| {
				let tcolor = t.color.hex();
				view! {
					<aside class="framework-box" style:border-left-color=tcolor>
						<h3 style:color=tcolor>{format!("Theoretical Framework: {}", t.name)}</h3>
						<p class="muted">{t.work}</p>
						{t.quote.map(|q| {
							view! {
								<p class="detail-quote" style:border-color=tcolor>
									"\u{201c}"{q}"\u{201d}"
								</p>
							}
						})}
					</aside>
				}
			})}
		</article>
	}
}

/// Full analysis page of one game.
#[component]
pub fn GameDetail(game: &'static Game) -> impl IntoView {
	let color = game.color.hex();
	let selected = RwSignal::new(0usize);
	let applied = game
		.theorists_applied
		.iter()
		.filter_map(|name| content::theorist_by_name(name).ok())
		.collect::<Vec<_>>();

	view! {
		<Title text=page_title(game.title) />
		<div class="page game-detail">
			<header class="page-header center">
				<h1 class="page-title neon-glow" style:color=color>{game.title}</h1>
				<p class="page-lead">{format!("{} \u{2022} {}", game.developer, game.year)}</p>
				<p>{game.description}</p>
			</header>

			<section class="panel central" style:border-left-color=color>
				<p class="detail-key">"Central Question"</p>
				<p class="central-question" style:color=color>{game.central_question}</p>
				<p class="muted">{game.central_argument}</p>
			</section>

			{content::paper_for(game.id).map(|paper| view! { <PaperAbstract paper=paper color=color /> })}

			<section>
				<h2 class="section-title" style:color=color>"Philosophical Themes"</h2>
				<div class="theme-tabs" role="tablist">
					{game
						.sections
						.iter()
						.enumerate()
						.map(|(i, s)| {
							view! {
								<button
									class="theme-tab"
									role="tab"
									class:active=move || selected.get() == i
									aria-selected=move || (selected.get() == i).to_string()
									style=format!("--accent: {color}")
									on:click=move |_| {
										debug!("{}: section {i}", game.id);
										selected.set(i);
									}
								>
									{s.heading}
								</button>
							}
						})
						.collect_view()}
				</div>
				{move || {
					game.sections
						.get(selected.get())
						.map(|s| view! { <SectionAnalysis section=s game=game /> })
				}}
			</section>

			<section>
				<h2 class="section-title" style:color=color>"Key Philosophical Questions"</h2>
				<div class="card-grid two">
					{game
						.philosophical_questions
						.iter()
						.map(|q| {
							view! {
								<div class="panel question" style:border-left-color=color>
									<p>{*q}</p>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section>
				<h2 class="section-title" style:color=color>"Theoretical Frameworks Applied"</h2>
				<div class="card-grid three">
					{applied
						.into_iter()
						.map(|t| {
							let tcolor = t.color.hex();
							view! {
								<div class="card" style:border-color=tcolor>
									<h3 style:color=tcolor>{t.name}</h3>
									<p class="muted">{t.work}</p>
									<ul class="detail-ideas">
										{t
											.key_ideas
											.iter()
											.take(APPLIED_IDEAS)
											.map(|idea| {
												view! {
													<li>
														<span style:color=tcolor>"\u{25b8} "</span>
														{*idea}
													</li>
												}
											})
											.collect_view()}
									</ul>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="panel">
				<h2 class="section-title" style:color=color>"Themes"</h2>
				<div class="tag-row">
					{game
						.themes
						.iter()
						.map(|t| view! { <span class="tag" style:color=color>{*t}</span> })
						.collect_view()}
				</div>
			</section>

			<p>
				<A href="/games" attr:class="back-link">
					"\u{2190} All games"
				</A>
			</p>
		</div>
	}
}

/// `/games/:id`: looks the game up by slug and renders its page, or the
/// lookup error.
#[component]
pub fn GamePage() -> impl IntoView {
	let params = use_params_map();
	let page = move || {
		let id = params.read().get("id").unwrap_or_default();
		content::game(&id).map(|game| view! { <GameDetail game=game /> })
	};

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<div class="page not-found">
					<h1 class="page-title red">"Game not found"</h1>
					<ul>
						{move || {
							errors
								.get()
								.into_iter()
								.map(|(_, e)| view! { <li>{e.to_string()}</li> })
								.collect_view()
						}}
					</ul>
					<A href="/games" attr:class="cta">
						"Back to games"
					</A>
				</div>
			}
		}>{page}</ErrorBoundary>
	}
}

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::page_title;
use crate::content::{COURSE_DESCRIPTION, COURSE_INFO, ColorToken};

const PILLARS: [(&str, ColorToken, &str); 4] = [
	("Technology", ColorToken::Blue, "/frameworks"),
	("Consciousness", ColorToken::Purple, "/concepts"),
	("Identity", ColorToken::Red, "/games"),
	("Environment", ColorToken::Green, "/schedule"),
];

/// Landing page: hero, the four thematic pillars and the course description.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text=page_title("") />
		<div class="page home">
			<section class="hero">
				<h1 class="hero-title neon-glow">"VIDEO GAMES"</h1>
				<h2 class="hero-subtitle">"as Philosophical Texts"</h2>
				<p class="hero-tagline">{COURSE_INFO.subtitle}</p>

				<div class="pillars">
					{PILLARS
						.into_iter()
						.map(|(title, color, href)| {
							view! {
								<A href=href attr:class=format!("pillar accent-{}", color.name())>
									<h3 style:color=color.hex()>{title}</h3>
								</A>
							}
						})
						.collect_view()}
				</div>

				<A href="/concepts" attr:class="cta">
					"Explore Concepts"
				</A>
			</section>

			<section class="narrow">
				<h2 class="section-title gold">"Course Description"</h2>
				{COURSE_DESCRIPTION.iter().map(|p| view! { <p class="lead">{*p}</p> }).collect_view()}
			</section>
		</div>
	}
}

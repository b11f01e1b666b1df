use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::page_title;
use crate::content::{GAMES, Game};

const CARD_THEMES: usize = 3;
const CARD_THEORISTS: usize = 3;

const RATIONALE: [(&str, &str); 4] = [
	(
		"Interactive Philosophy",
		"Games require the player's participation, so their arguments are understood \
		 through embodied action rather than observation.",
	),
	(
		"Procedural Rhetoric",
		"Rules and mechanics make claims of their own. They shape how we weigh moral \
		 choice, agency and consequence.",
	),
	(
		"Multidisciplinary",
		"Each game draws technology theory, environmental ethics, political philosophy \
		 and narrative studies into one text.",
	),
	(
		"Cultural Significance",
		"Together they show the medium's capacity for serious humanistic inquiry and \
		 cultural critique.",
	),
];

const COMPARATIVE_THEMES: [(&str, &str); 4] = [
	(
		"Technology & Human Identity",
		"Atomic Heart stages Soviet technological utopianism gone wrong. Detroit questions \
		 the boundary between human and machine consciousness. Horizon treats technology \
		 as both destroyer and savior, and BioShock shows political ideology embedded in \
		 built artifacts.",
	),
	(
		"Player Agency & Moral Responsibility",
		"Detroit makes player choice its central mechanic for exploring android personhood. \
		 BioShock subverts player agency to argue about free will, while Atomic Heart and \
		 Horizon embody dilemmas about technological progress in play.",
	),
	(
		"Environmental & Political Ethics",
		"Horizon centers biocentric ethics in a post-apocalyptic ecosystem. Atomic Heart \
		 reads environmental devastation as the cost of expansion, BioShock critiques \
		 Objectivism through its ruined city, and Detroit frames civil rights through \
		 android liberation.",
	),
	(
		"Medium-Specific Philosophy",
		"These games do not only describe philosophical problems; they make the player \
		 live through them. BioShock's \"Would you kindly\" works only because the player \
		 believed they had agency. The mechanics are the argument.",
	),
];

#[component]
fn GameCard(game: &'static Game) -> impl IntoView {
	let color = game.color.hex();

	view! {
		<A href=game.path attr:class="card game-card">
			<div class="game-card-head">
				<span class="game-emoji">{game.emoji}</span>
				<div>
					<h3 style:color=color>{game.title}</h3>
					<p class="muted">{format!("{} \u{2022} {}", game.developer, game.year)}</p>
				</div>
			</div>
			<p>{game.description}</p>
			<p class="detail-key">"Philosophical Themes:"</p>
			<div class="tag-row">
				{game
					.themes
					.iter()
					.take(CARD_THEMES)
					.map(|t| view! { <span class="tag" style:color=color>{*t}</span> })
					.collect_view()}
			</div>
			<div class="game-card-foot">
				<p class="muted">
					<span class="detail-key">"Theorists Applied: "</span>
					{game.theorists_applied.iter().take(CARD_THEORISTS).copied().collect::<Vec<_>>().join(", ")}
				</p>
				<p class="game-card-meta">
					<span class="muted">
						{format!("{} Key Questions", game.philosophical_questions.len())}
					</span>
					<span style:color=color>"Explore Analysis \u{2192}"</span>
				</p>
			</div>
		</A>
	}
}

/// Index of the four games with the case for studying them together.
#[component]
pub fn Games() -> impl IntoView {
	view! {
		<Title text=page_title("Games") />
		<div class="page">
			<header class="page-header center">
				<h1 class="page-title red neon-glow">"Games as Philosophical Texts"</h1>
				<p class="page-lead">
					"In-depth analyses of the four games central to the course, each engaging \
					 technology, consciousness, identity and environmental ethics through its \
					 mechanics and narrative."
				</p>
			</header>

			<section class="panel accent-red">
				<h2 class="section-title red">"Why These Games?"</h2>
				<p>
					"These games are read as primary texts, given the same rigorous analysis \
					 as literary and philosophical works."
				</p>
				<div class="two-col">
					{RATIONALE
						.into_iter()
						.map(|(label, body)| {
							view! {
								<p>
									<span class="red detail-key">{label}": "</span>
									{body}
								</p>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section class="card-grid two">
				{GAMES.iter().map(|g| view! { <GameCard game=g /> }).collect_view()}
			</section>

			<section class="panel">
				<h2 class="section-title red">"Comparative Themes Across Games"</h2>
				{COMPARATIVE_THEMES
					.into_iter()
					.map(|(heading, body)| {
						view! {
							<h3>{heading}</h3>
							<p class="muted">{body}</p>
						}
					})
					.collect_view()}
			</section>
		</div>
	}
}

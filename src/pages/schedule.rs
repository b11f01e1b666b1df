use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::page_title;
use crate::content::{self, SCHEDULE, Week};

fn game_cell(week: &Week) -> AnyView {
	match week.game.and_then(|id| content::game(id).ok()) {
		Some(game) => view! {
			<A href=game.path attr:class="schedule-game">
				{game.emoji}" "{game.title}
			</A>
		}
		.into_any(),
		None => view! { <span class="muted">"\u{2014}"</span> }.into_any(),
	}
}

/// The fifteen-week meeting schedule.
#[component]
pub fn Schedule() -> impl IntoView {
	view! {
		<Title text=page_title("Schedule") />
		<div class="page">
			<h1 class="page-title green neon-glow">"Course Schedule"</h1>
			<p class="page-lead">"Fifteen weeks, from foundations to final research."</p>
			<div class="table-wrap">
				<table class="schedule">
					<thead>
						<tr>
							<th>"Week"</th>
							<th>"Unit"</th>
							<th>"Topic"</th>
							<th>"Readings"</th>
							<th>"Game"</th>
						</tr>
					</thead>
					<tbody>
						{SCHEDULE
							.iter()
							.map(|week| {
								view! {
									<tr style:border-left-color=week.color.hex()>
										<td class="week-number" style:color=week.color.hex()>
											{week.number}
										</td>
										<td>{week.unit}</td>
										<td>{week.topic}</td>
										<td>
											<ul class="readings">
												{week
													.readings
													.iter()
													.map(|r| view! { <li>{*r}</li> })
													.collect_view()}
											</ul>
										</td>
										<td>{game_cell(week)}</td>
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
			</div>
		</div>
	}
}

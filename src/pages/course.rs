use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::config::page_title;
use crate::content::{
	ASSIGNMENTS, COURSE_DESCRIPTION, COURSE_INFO, GAMES, LEARNING_OBJECTIVES, REQUIRED_BOOKS,
};

/// Syllabus overview: logistics, description, objectives, texts and grading.
#[component]
pub fn Course() -> impl IntoView {
	let info = [
		("Course", COURSE_INFO.course_number),
		("Department", COURSE_INFO.department),
		("Semester", COURSE_INFO.semester),
		("Meets", COURSE_INFO.class_time),
		("Instructor", COURSE_INFO.instructor),
		("Email", COURSE_INFO.email),
		("Office Hours", COURSE_INFO.office_hours),
	];

	view! {
		<Title text=page_title("Course") />
		<div class="page">
			<h1 class="page-title blue neon-glow">{COURSE_INFO.title}</h1>
			<p class="page-lead">{COURSE_INFO.subtitle}</p>

			<section class="panel">
				<dl class="info-list">
					{info
						.into_iter()
						.map(|(k, v)| {
							view! {
								<dt>{k}</dt>
								<dd>{v}</dd>
							}
						})
						.collect_view()}
				</dl>
			</section>

			<section>
				<h2 class="section-title gold">"Course Description"</h2>
				{COURSE_DESCRIPTION.iter().map(|p| view! { <p class="lead">{*p}</p> }).collect_view()}
			</section>

			<section>
				<h2 class="section-title gold">"Learning Objectives"</h2>
				<ol class="objectives">
					{LEARNING_OBJECTIVES.iter().map(|o| view! { <li>{*o}</li> }).collect_view()}
				</ol>
			</section>

			<section>
				<h2 class="section-title gold">"Required Games"</h2>
				<div class="tag-row">
					{GAMES
						.iter()
						.map(|g| {
							view! {
								<A href=g.path attr:class="tag">
									{g.emoji}" "{g.title}
								</A>
							}
						})
						.collect_view()}
				</div>
			</section>

			<section>
				<h2 class="section-title gold">"Required Books"</h2>
				<ul class="books">
					{REQUIRED_BOOKS.iter().map(|b| view! { <li>{*b}</li> }).collect_view()}
				</ul>
			</section>

			<section>
				<h2 class="section-title gold">"Assignments & Grading"</h2>
				<div class="assignments">
					{ASSIGNMENTS
						.iter()
						.map(|a| {
							let color = a.color.hex();
							view! {
								<div class="assignment" style:border-left-color=color>
									<div class="assignment-head">
										<h3>{a.name}</h3>
										<span class="weight" style:color=color>
											{format!("{}%", a.weight)}
										</span>
									</div>
									<p class="muted">{a.description}</p>
									<div class="weight-bar">
										<span
											style:width=format!("{}%", a.weight)
											style:background-color=color
										></span>
									</div>
								</div>
							}
						})
						.collect_view()}
				</div>
			</section>
		</div>
	}
}

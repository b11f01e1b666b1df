use leptos::prelude::*;
use leptos_router::components::A;

use crate::content::COURSE_INFO;

/// Header navigation entries, in display order.
pub const NAV_ITEMS: &[(&str, &str)] = &[
	("/", "Home"),
	("/concepts", "Concepts"),
	("/frameworks", "Frameworks"),
	("/games", "Games"),
	("/schedule", "Schedule"),
	("/course", "Course"),
	("/resources", "Resources"),
];

/// Site header with the main navigation. Below the mobile breakpoint the
/// links collapse behind a toggle.
#[component]
pub fn Header() -> impl IntoView {
	let (menu_open, set_menu_open) = signal(false);

	view! {
		<header class="site-header">
			<div class="header-inner">
				<A href="/" attr:class="brand">
					<span class="brand-mark">"\u{25c8}"</span>
					<span class="brand-text">"Games \u{00d7} Philosophy"</span>
				</A>
				<button
					class="menu-toggle"
					aria-label="Toggle navigation"
					aria-expanded=move || menu_open.get().to_string()
					on:click=move |_| set_menu_open.update(|open| *open = !*open)
				>
					{move || if menu_open.get() { "\u{2715}" } else { "\u{2630}" }}
				</button>
				<nav
					class="site-nav"
					class:open=move || menu_open.get()
					on:click=move |_| set_menu_open.set(false)
				>
					{NAV_ITEMS
						.iter()
						.map(|&(href, label)| {
							view! {
								<A href=href attr:class="nav-link">
									{label}
								</A>
							}
						})
						.collect_view()}
				</nav>
			</div>
		</header>
	}
}

/// Course facts and credits.
#[component]
pub fn Footer() -> impl IntoView {
	view! {
		<footer class="site-footer">
			<div class="footer-grid">
				<div>
					<h4>{COURSE_INFO.title}</h4>
					<p>{COURSE_INFO.subtitle}</p>
					<p class="muted">{COURSE_INFO.department}</p>
				</div>
				<div>
					<h4>"Image Credits"</h4>
					<p class="muted">
						"Game imagery belongs to its publishers and is used for scholarly commentary."
					</p>
				</div>
				<div>
					<h4>"Academic Context"</h4>
					<p class="muted">
						{format!("{} \u{2022} {}", COURSE_INFO.university, COURSE_INFO.semester)}
					</p>
				</div>
			</div>
		</footer>
	}
}

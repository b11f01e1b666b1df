//! Leptos client-side app wiring and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;
use log::{Level, info, warn};

// Modules
pub mod components;
pub mod config;
pub mod content;
pub mod pages;

use crate::components::layout::{Footer, Header};
use crate::config::{SITE_TITLE, SiteConfig};

// Top-Level pages
use crate::pages::concepts::Concepts;
use crate::pages::course::Course;
use crate::pages::frameworks::Frameworks;
use crate::pages::game_detail::GamePage;
use crate::pages::games::Games;
use crate::pages::home::Home;
use crate::pages::not_found::NotFound;
use crate::pages::resources::Resources;
use crate::pages::schedule::Schedule;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("Logging initialized");
}

/// Logs every broken cross reference in the content tables.
pub fn audit_content() {
	let faults = content::audit();
	for fault in &faults {
		warn!("content: {fault}");
	}
	info!("content audit finished with {} faults", faults.len());
}

/// Every page route, with [`NotFound`] for the rest. Renders inside a
/// `Router`.
#[component]
pub fn SiteRoutes() -> impl IntoView {
	view! {
		<Routes fallback=|| view! { <NotFound /> }>
			<Route path=path!("/") view=Home />
			<Route path=path!("/concepts") view=Concepts />
			<Route path=path!("/frameworks") view=Frameworks />
			<Route path=path!("/games") view=Games />
			<Route path=path!("/games/:id") view=GamePage />
			<Route path=path!("/schedule") view=Schedule />
			<Route path=path!("/course") view=Course />
			<Route path=path!("/resources") view=Resources />
		</Routes>
	}
}

/// The course site: header, routed page, footer, under the base path Trunk
/// was built with.
#[component]
pub fn App() -> impl IntoView {
	// Provides context that manages stylesheets, titles, meta tags, etc.
	provide_meta_context();
	let config = SiteConfig::from_document();
	info!("router base: {:?}", config.router_base());

	view! {
		<Html attr:lang="en" attr:dir="ltr" attr:data-theme="dark" />

		// sets the document title
		<Title text=SITE_TITLE />

		// injects metadata in the <head> of the page
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Meta name="description" content="Graduate seminar on video games as philosophical texts" />

		<Router base=config.router_base()>
			<Header />
			<main class="site-main">
				<SiteRoutes />
			</main>
			<Footer />
		</Router>
	}
}

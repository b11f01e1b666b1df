#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos::task::Executor;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;
use philosophy_games_site::SiteRoutes;
use philosophy_games_site::components::concept_map::ConceptMap;
use philosophy_games_site::content;
use philosophy_games_site::pages::game_detail::GameDetail;
use philosophy_games_site::pages::not_found::NotFound;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let root = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&root).unwrap();
	root.unchecked_into()
}

fn texts(root: &Element, selector: &str) -> Vec<String> {
	let found = root.query_selector_all(selector).unwrap();
	(0..found.length())
		.filter_map(|i| found.item(i))
		.filter_map(|n| n.text_content())
		.collect()
}

/// Points the browser at `path`, mounts the site routes and lets the router
/// settle. The mount stays alive for the rest of the run.
async fn navigate(path: &str) -> HtmlElement {
	web_sys::window()
		.unwrap()
		.history()
		.unwrap()
		.push_state_with_url(&JsValue::NULL, "", Some(path))
		.unwrap();
	let root = container();
	let handle = leptos::mount::mount_to(root.clone(), || {
		provide_meta_context();
		view! {
			<Router>
				<SiteRoutes />
			</Router>
		}
	});
	std::mem::forget(handle);
	Executor::tick().await;
	root
}

#[wasm_bindgen_test]
async fn navigating_to_atomic_heart_renders_headline_once() {
	let root = navigate("/games/atomic-heart").await;
	assert_eq!(texts(&root, "h1"), vec!["Atomic Heart".to_string()]);
}

#[wasm_bindgen_test]
async fn every_game_path_routes_to_its_page() {
	for game in content::GAMES {
		let root = navigate(game.path).await;
		assert_eq!(texts(&root, "h1"), vec![game.title.to_string()], "{}", game.path);
	}
}

#[wasm_bindgen_test]
async fn unknown_game_slug_renders_lookup_error() {
	let root = navigate("/games/half-life").await;
	assert_eq!(texts(&root, "h1"), vec!["Game not found".to_string()]);
	assert!(texts(&root, "li").iter().any(|e| e.contains("half-life")));
}

#[wasm_bindgen_test]
async fn unrouted_path_renders_not_found() {
	let root = navigate("/syllabus/2019").await;
	assert_eq!(texts(&root, "h1"), vec!["404".to_string()]);
}

#[wasm_bindgen_test]
fn atomic_heart_headline_renders_once() {
	let game = content::game("atomic-heart").unwrap();
	let root = container();
	let _handle = leptos::mount::mount_to(root.clone(), move || {
		provide_meta_context();
		view! {
			<Router>
				<GameDetail game=game />
			</Router>
		}
	});

	assert_eq!(texts(&root, "h1"), vec!["Atomic Heart".to_string()]);
	assert_eq!(texts(&root, ".theme-tab").len(), game.sections.len());
	assert!(texts(&root, "h2").iter().any(|h| h == "Research Paper"));
	assert!(texts(&root, "figcaption").iter().any(|c| c.ends_with("\u{00b7} Hayles")));
}

#[wasm_bindgen_test]
fn games_without_a_paper_skip_the_abstract() {
	let game = content::game("detroit").unwrap();
	let root = container();
	let _handle = leptos::mount::mount_to(root.clone(), move || {
		provide_meta_context();
		view! {
			<Router>
				<GameDetail game=game />
			</Router>
		}
	});

	assert_eq!(texts(&root, "h1"), vec!["Detroit: Become Human".to_string()]);
	assert!(!texts(&root, "h2").iter().any(|h| h == "Research Paper"));
}

#[wasm_bindgen_test]
fn concept_map_starts_unfiltered_without_panel() {
	let root = container();
	let _handle = leptos::mount::mount_to(root.clone(), ConceptMap);

	let buttons = texts(&root, ".filter-button");
	assert_eq!(buttons.len(), 4);
	assert!(buttons[0].ends_with("All"));
	assert_eq!(texts(&root, ".filter-button.active").len(), 1);
	assert!(root.query_selector("canvas").unwrap().is_some());
	assert!(root.query_selector(".detail-panel").unwrap().is_none());
	assert!(root.query_selector(".map-surface.panel-open").unwrap().is_none());
	assert_eq!(texts(&root, ".hover-readout"), vec![String::new()]);
	assert!(
		texts(&root, ".legend-hint")[0].contains("Click nodes for details")
	);
}

#[wasm_bindgen_test]
fn not_found_links_home() {
	let root = container();
	let _handle = leptos::mount::mount_to(root.clone(), || {
		provide_meta_context();
		view! {
			<Router>
				<NotFound />
			</Router>
		}
	});

	assert_eq!(texts(&root, "h1"), vec!["404".to_string()]);
	assert!(root.query_selector("a.cta").unwrap().is_some());
}

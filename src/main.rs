use philosophy_games_site::{App, audit_content, init_logging};

fn main() {
	init_logging();
	audit_content();
	leptos::mount::mount_to_body(App);
}

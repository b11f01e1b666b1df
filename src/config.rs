//! Site settings.
//!
//! The deployment path has a single source: Trunk's `public_url`
//! (`Trunk.toml`, `trunk build --public-url` or `TRUNK_BUILD_PUBLIC_URL`).
//! Trunk prefixes every asset with it and writes it into the
//! `<base data-trunk-public-url>` element of `index.html`, where the router
//! reads it back at startup.

const DEFAULT_BASE_PATH: &str = "/educational-Video-Games-Philosophy-";

/// Name of the site, suffixed to every page title.
pub const SITE_TITLE: &str = "Video Games as Philosophical Texts";

/// Where the bundle is served.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
	/// Path prefix of every route, without a trailing slash. Empty when
	/// served from the domain root.
	pub base_path: String,
}

impl SiteConfig {
	/// Reads the `href` of the document's `<base>` element. Falls back to the
	/// default deployment path when there is none.
	pub fn from_document() -> Self {
		let href = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.query_selector("base[href]").ok().flatten())
			.and_then(|base| base.get_attribute("href"));
		Self::from_base_href(href.as_deref())
	}

	pub fn from_base_href(href: Option<&str>) -> Self {
		Self {
			base_path: href.map_or_else(|| DEFAULT_BASE_PATH.to_string(), base_path_of),
		}
	}

	/// Router base: leading slash, no trailing slash, `""` for the root.
	pub fn router_base(&self) -> String {
		normalize_base(&self.base_path)
	}
}

/// Document title for a page, `"<page> | <site>"`.
pub fn page_title(page: &str) -> String {
	if page.is_empty() {
		SITE_TITLE.to_string()
	} else {
		format!("{page} | {SITE_TITLE}")
	}
}

/// Path part of a base `href`; absolute URLs lose their scheme and host.
fn base_path_of(href: &str) -> String {
	let path = match href.split_once("://") {
		Some((_, rest)) => rest.find('/').map_or("", |i| &rest[i..]),
		None => href,
	};
	normalize_base(path)
}

fn normalize_base(path: &str) -> String {
	let trimmed = path.trim().trim_matches('/');
	if trimmed.is_empty() {
		String::new()
	} else {
		format!("/{trimmed}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_base() {
		assert_eq!(normalize_base(""), "");
		assert_eq!(normalize_base("/"), "");
		assert_eq!(normalize_base("site"), "/site");
		assert_eq!(normalize_base("/site/"), "/site");
		assert_eq!(normalize_base(" /a/b/ "), "/a/b");
	}

	#[test]
	fn test_base_href_drives_router_base() {
		// What Trunk writes for `--public-url /x/`.
		assert_eq!(SiteConfig::from_base_href(Some("/x/")).router_base(), "/x");
		assert_eq!(SiteConfig::from_base_href(Some("/")).router_base(), "");
		assert_eq!(
			SiteConfig::from_base_href(Some("https://example.org/course/site/")).router_base(),
			"/course/site"
		);
		assert_eq!(
			SiteConfig::from_base_href(Some("https://example.org")).router_base(),
			""
		);
	}

	#[test]
	fn test_missing_base_uses_trunk_default() {
		let config = SiteConfig::from_base_href(None);
		assert_eq!(config.router_base(), DEFAULT_BASE_PATH);

		// Must agree with `public_url` in Trunk.toml.
		let trunk = include_str!("../Trunk.toml");
		assert!(trunk.contains(&format!("public_url = \"{DEFAULT_BASE_PATH}/\"")));
	}

	#[test]
	fn test_index_declares_trunk_base() {
		let index = include_str!("../index.html");
		assert!(index.contains("<base data-trunk-public-url"));
	}

	#[test]
	fn test_page_title() {
		assert_eq!(page_title("Games"), format!("Games | {SITE_TITLE}"));
		assert_eq!(page_title(""), SITE_TITLE);
	}
}

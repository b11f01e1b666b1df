//! Static course content and the lookups over it.
//!
//! Every table is a `static` slice built at compile time. Cross references
//! between tables are stored as display names and resolved with
//! [`normalize_name`] and [`leading_clause`]; [`audit`] reports every
//! reference that does not resolve.

use thiserror::Error;

mod concepts;
mod games;
mod quotes;
mod resources;
mod schedule;
mod syllabus;
mod theorists;

pub use concepts::CONCEPTS;
pub use games::GAMES;
pub use quotes::{PAPER_QUOTES, PaperMetadata, PaperQuote, SAMPLE_PAPER, paper_for};
pub use resources::{RESOURCE_GROUPS, RECOMMENDED_BOOKS, Resource, ResourceGroup, Book};
pub use schedule::{SCHEDULE, Week};
pub use syllabus::{
	ASSIGNMENTS, Assignment, COURSE_DESCRIPTION, COURSE_INFO, CourseInfo, LEARNING_OBJECTIVES,
	REQUIRED_BOOKS,
};
pub use theorists::THEORISTS;

/// Accent colors shared by every table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
	Red,
	Blue,
	Green,
	Purple,
	Gold,
}

impl ColorToken {
	/// CSS hex value of the token.
	pub const fn hex(self) -> &'static str {
		match self {
			ColorToken::Red => "#ff3366",
			ColorToken::Blue => "#00d4ff",
			ColorToken::Green => "#39ff14",
			ColorToken::Purple => "#b967ff",
			ColorToken::Gold => "#d4af37",
		}
	}

	/// Name used in CSS class suffixes, e.g. `accent-red`.
	pub const fn name(self) -> &'static str {
		match self {
			ColorToken::Red => "red",
			ColorToken::Blue => "blue",
			ColorToken::Green => "green",
			ColorToken::Purple => "purple",
			ColorToken::Gold => "gold",
		}
	}
}

/// A scholar whose work frames the course.
#[derive(Debug, PartialEq)]
pub struct Theorist {
	pub id: &'static str,
	pub name: &'static str,
	pub work: &'static str,
	pub key_ideas: &'static [&'static str],
	pub quote: Option<&'static str>,
	/// How the framework is put to work on the games.
	pub application: &'static str,
	pub color: ColorToken,
	pub games: &'static [&'static str],
}

/// A philosophical theme tying a theorist to games.
#[derive(Debug, PartialEq)]
pub struct Concept {
	pub id: &'static str,
	pub title: &'static str,
	pub subtitle: &'static str,
	/// Display name of the owning theorist, resolved with [`normalize_name`].
	pub theorist: &'static str,
	pub description: &'static str,
	pub key_idea: &'static str,
	/// Free-text game names, resolved with [`leading_clause`].
	pub games: &'static [&'static str],
	pub color: ColorToken,
}

/// One titled block of a game's analysis page.
#[derive(Debug, PartialEq)]
pub struct AnalysisSection {
	pub heading: &'static str,
	pub body: &'static str,
	/// Theorist id whose framework the section applies.
	pub theorist: Option<&'static str>,
	pub quote: Option<&'static PaperQuote>,
}

/// A game studied as a primary text.
#[derive(Debug, PartialEq)]
pub struct Game {
	pub id: &'static str,
	pub title: &'static str,
	pub developer: &'static str,
	pub year: u16,
	pub description: &'static str,
	pub themes: &'static [&'static str],
	/// Display names, resolved with [`theorist_by_name`].
	pub theorists_applied: &'static [&'static str],
	pub philosophical_questions: &'static [&'static str],
	pub color: ColorToken,
	pub emoji: &'static str,
	pub path: &'static str,
	pub central_question: &'static str,
	pub central_argument: &'static str,
	pub sections: &'static [AnalysisSection],
}

/// A broken cross reference in the content tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
	#[error("concept `{concept}` names theorist `{theorist}`, which has no entry")]
	UnknownConceptTheorist {
		concept: &'static str,
		theorist: &'static str,
	},
	#[error("concept `{concept}` names game `{game}`, which matches no title")]
	UnknownConceptGame {
		concept: &'static str,
		game: &'static str,
	},
	#[error("game `{game}` applies theorist `{theorist}`, which has no entry")]
	UnknownAppliedTheorist {
		game: &'static str,
		theorist: &'static str,
	},
	#[error("section `{section}` of game `{game}` cites theorist id `{theorist}`, which has no entry")]
	UnknownSectionTheorist {
		game: &'static str,
		section: &'static str,
		theorist: &'static str,
	},
	#[error("no theorist with id `{0}`")]
	TheoristNotFound(String),
	#[error("no game with id `{0}`")]
	GameNotFound(String),
}

/// Turns a display name into the id form: lowercase, whitespace runs joined
/// with `-`, periods removed.
pub fn normalize_name(name: &str) -> String {
	name.split_whitespace()
		.map(|part| part.replace('.', "").to_lowercase())
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join("-")
}

/// Lowercased text before the first `:`, trimmed. `"Detroit: Become Human"`
/// gives `"detroit"`.
pub fn leading_clause(name: &str) -> String {
	name.split(':').next().unwrap_or_default().trim().to_lowercase()
}

/// Whether `title` contains the leading clause of `name`. An empty clause
/// matches nothing.
pub fn title_matches(title: &str, name: &str) -> bool {
	let clause = leading_clause(name);
	!clause.is_empty() && title.to_lowercase().contains(&clause)
}

pub fn theorist(id: &str) -> Result<&'static Theorist, ContentError> {
	THEORISTS
		.iter()
		.find(|t| t.id == id)
		.ok_or_else(|| ContentError::TheoristNotFound(id.to_string()))
}

/// Resolves a display name such as `"Donna Haraway"` or `"Haraway"`.
///
/// The normalized name is tried as an id first, then against the normalized
/// display names and their final component.
pub fn theorist_by_name(name: &str) -> Result<&'static Theorist, ContentError> {
	let key = normalize_name(name);
	THEORISTS
		.iter()
		.find(|t| t.id == key)
		.or_else(|| {
			THEORISTS.iter().find(|t| {
				let full = normalize_name(t.name);
				full == key || full.rsplit('-').next() == Some(key.as_str())
			})
		})
		.ok_or(ContentError::TheoristNotFound(key))
}

pub fn game(id: &str) -> Result<&'static Game, ContentError> {
	GAMES
		.iter()
		.find(|g| g.id == id)
		.ok_or_else(|| ContentError::GameNotFound(id.to_string()))
}

/// Concepts owned by the theorist with the given id.
pub fn concepts_of(theorist_id: &str) -> impl Iterator<Item = &'static Concept> + '_ {
	CONCEPTS
		.iter()
		.filter(move |c| normalize_name(c.theorist) == theorist_id)
}

/// Every broken cross reference across the tables.
pub fn audit() -> Vec<ContentError> {
	let mut faults = Vec::new();

	for concept in CONCEPTS {
		let key = normalize_name(concept.theorist);
		if !THEORISTS.iter().any(|t| t.id == key) {
			faults.push(ContentError::UnknownConceptTheorist {
				concept: concept.id,
				theorist: concept.theorist,
			});
		}
		for &name in concept.games {
			if !GAMES.iter().any(|g| title_matches(g.title, name)) {
				faults.push(ContentError::UnknownConceptGame {
					concept: concept.id,
					game: name,
				});
			}
		}
	}

	for game in GAMES {
		for &name in game.theorists_applied {
			if theorist_by_name(name).is_err() {
				faults.push(ContentError::UnknownAppliedTheorist {
					game: game.id,
					theorist: name,
				});
			}
		}
		for section in game.sections {
			if let Some(id) = section.theorist {
				if theorist(id).is_err() {
					faults.push(ContentError::UnknownSectionTheorist {
						game: game.id,
						section: section.heading,
						theorist: id,
					});
				}
			}
		}
	}

	faults
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_normalize_name() {
		assert_eq!(normalize_name("McLuhan"), "mcluhan");
		assert_eq!(normalize_name("N. Katherine Hayles"), "n-katherine-hayles");
		assert_eq!(normalize_name("  Donna   Haraway "), "donna-haraway");
		assert_eq!(normalize_name("Paul W. Taylor"), "paul-w-taylor");
		assert_eq!(normalize_name(""), "");
	}

	#[test]
	fn test_leading_clause() {
		assert_eq!(leading_clause("Detroit: Become Human"), "detroit");
		assert_eq!(leading_clause("  Horizon Zero Dawn "), "horizon zero dawn");
		assert_eq!(leading_clause(": nothing"), "");
	}

	#[test]
	fn test_title_matches_is_case_insensitive() {
		assert!(title_matches("Horizon Zero Dawn", "horizon zero dawn"));
		assert!(title_matches("Horizon Zero Dawn", "HORIZON ZERO DAWN"));
		assert!(title_matches("Detroit: Become Human", "Detroit: Become Human"));
		assert!(title_matches("BioShock", "Bioshock"));
		assert!(!title_matches("Atomic Heart", ""));
		assert!(!title_matches("Atomic Heart", "Half-Life"));
	}

	#[test]
	fn test_table_ids_are_unique() {
		let theorists: HashSet<_> = THEORISTS.iter().map(|t| t.id).collect();
		let concepts: HashSet<_> = CONCEPTS.iter().map(|c| c.id).collect();
		let games: HashSet<_> = GAMES.iter().map(|g| g.id).collect();
		assert_eq!(theorists.len(), THEORISTS.len());
		assert_eq!(concepts.len(), CONCEPTS.len());
		assert_eq!(games.len(), GAMES.len());
	}

	#[test]
	fn test_theorist_lookup() {
		assert_eq!(theorist("haraway").map(|t| t.name), Ok("Donna Haraway"));
		assert_eq!(
			theorist("nobody"),
			Err(ContentError::TheoristNotFound("nobody".into()))
		);
	}

	#[test]
	fn test_theorist_by_name_accepts_surname_or_full_name() {
		assert_eq!(theorist_by_name("Haraway").map(|t| t.id), Ok("haraway"));
		assert_eq!(theorist_by_name("Donna Haraway").map(|t| t.id), Ok("haraway"));
		assert_eq!(theorist_by_name("N. Katherine Hayles").map(|t| t.id), Ok("hayles"));
		assert!(theorist_by_name("Ian Bogost").is_err());
	}

	#[test]
	fn test_game_lookup() {
		assert_eq!(game("atomic-heart").map(|g| g.title), Ok("Atomic Heart"));
		assert!(matches!(game("pong"), Err(ContentError::GameNotFound(id)) if id == "pong"));
	}

	#[test]
	fn test_every_game_has_a_detail_route() {
		for game in GAMES {
			assert!(game.path.starts_with("/games/"), "{}", game.id);
			assert!(!game.sections.is_empty(), "{}", game.id);
		}
	}

	#[test]
	fn test_audit_reports_only_the_known_orphan() {
		// Procedural rhetoric is Bogost's, and Bogost has no theorist entry.
		let faults = audit();
		assert_eq!(
			faults,
			vec![ContentError::UnknownConceptTheorist {
				concept: "procedural-rhetoric",
				theorist: "Ian Bogost",
			}]
		);
	}

	#[test]
	fn test_concepts_of() {
		let ids: Vec<_> = concepts_of("haraway").map(|c| c.id).collect();
		assert_eq!(ids, vec!["cyborg-theory", "identity-transformation"]);
	}

	#[test]
	fn test_color_tokens() {
		assert_eq!(ColorToken::Gold.hex(), "#d4af37");
		assert_eq!(ColorToken::Purple.name(), "purple");
	}
}

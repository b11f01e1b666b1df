use std::convert::Infallible;
use std::str::FromStr;

use super::graph::NodeCategory;

/// Which node category the map shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
	#[default]
	All,
	Theorists,
	Concepts,
	Games,
}

impl CategoryFilter {
	pub const ALL: [CategoryFilter; 4] = [
		CategoryFilter::All,
		CategoryFilter::Theorists,
		CategoryFilter::Concepts,
		CategoryFilter::Games,
	];

	pub fn admits(self, category: NodeCategory) -> bool {
		match self {
			CategoryFilter::All => true,
			CategoryFilter::Theorists => category == NodeCategory::Theorist,
			CategoryFilter::Concepts => category == NodeCategory::Concept,
			CategoryFilter::Games => category == NodeCategory::Game,
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			CategoryFilter::All => "all",
			CategoryFilter::Theorists => "theorists",
			CategoryFilter::Concepts => "concepts",
			CategoryFilter::Games => "games",
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			CategoryFilter::All => "All",
			CategoryFilter::Theorists => "Theorists",
			CategoryFilter::Concepts => "Concepts",
			CategoryFilter::Games => "Games",
		}
	}

	pub fn icon(self) -> &'static str {
		match self {
			CategoryFilter::All => "\u{2726}",
			CategoryFilter::Theorists => NodeCategory::Theorist.glyph(),
			CategoryFilter::Concepts => NodeCategory::Concept.glyph(),
			CategoryFilter::Games => NodeCategory::Game.glyph(),
		}
	}

	/// Accent color of the filter button.
	pub fn color(self) -> &'static str {
		match self {
			CategoryFilter::All | CategoryFilter::Theorists => "#d4af37",
			CategoryFilter::Concepts => "#b967ff",
			CategoryFilter::Games => "#ff3366",
		}
	}
}

/// Unknown values fall back to [`CategoryFilter::All`].
impl FromStr for CategoryFilter {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s.trim().to_ascii_lowercase().as_str() {
			"theorists" => CategoryFilter::Theorists,
			"concepts" => CategoryFilter::Concepts,
			"games" => CategoryFilter::Games,
			_ => CategoryFilter::All,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_known_values() {
		for filter in CategoryFilter::ALL {
			assert_eq!(filter.as_str().parse::<CategoryFilter>(), Ok(filter));
		}
		assert_eq!("Games".parse::<CategoryFilter>(), Ok(CategoryFilter::Games));
	}

	#[test]
	fn test_unknown_value_means_all() {
		assert_eq!("gamez".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
		assert_eq!("".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
	}

	#[test]
	fn test_admits() {
		assert!(CategoryFilter::All.admits(NodeCategory::Game));
		assert!(CategoryFilter::Games.admits(NodeCategory::Game));
		assert!(!CategoryFilter::Games.admits(NodeCategory::Concept));
		assert!(CategoryFilter::Theorists.admits(NodeCategory::Theorist));
	}
}

//! Passages from the sample research paper on Atomic Heart.

/// A passage and the paper section it comes from.
#[derive(Debug, PartialEq)]
pub struct PaperQuote {
	pub text: &'static str,
	pub section: &'static str,
	/// Surname of the theorist the section leans on, if any.
	pub theorist: Option<&'static str>,
}

/// Bibliographic front matter of the paper.
#[derive(Debug, PartialEq)]
pub struct PaperMetadata {
	pub title: &'static str,
	pub abstract_text: &'static str,
	pub keywords: &'static [&'static str],
}

pub static INTRODUCTION: PaperQuote = PaperQuote {
	text: "This article explores the complex philosophical and ethical issues raised by nature and technology in \"Atomic Heart.\" The analysis critically synthesizes online resources to determine how video games, notably \"Atomic Heart,\" confuse reality and illusion.",
	section: "Introduction",
	theorist: None,
};

pub static REALITY_ILLUSION: PaperQuote = PaperQuote {
	text: "The game immerses players in an apocalyptic universe where the physical and the imaginary are purposely mixed, providing a challenging and profoundly ethical environment.",
	section: "Reality and Illusion",
	theorist: Some("Hayles"),
};

pub static ENVIRONMENTAL_AWARENESS: PaperQuote = PaperQuote {
	text: "The game's apocalyptic scene is a vivid microcosm of unbridled technological growth, reflecting real-world worries about its ecological impact.",
	section: "Environmental Awareness",
	theorist: Some("Chang"),
};

pub static SOVIET_SYMBOLISM: PaperQuote = PaperQuote {
	text: "The game's symbols and themes are firmly ingrained in Soviet ideology, adding to its narrative intricacy and ethical implications. The game's complex dance of technology, politics, and conservation challenges players to consider technological growth's social and political impacts.",
	section: "Soviet Symbolism",
	theorist: Some("Winner"),
};

pub static IDENTITY_TRANSFORMATION: PaperQuote = PaperQuote {
	text: "Players contemplate the ethical implications of combining human nature with technology as they meet cybernetic entities. The transforming journey leads to ethical investigation of technology's massive influence on nature.",
	section: "Human Identity",
	theorist: Some("Haraway"),
};

pub static SCIENTIFIC_ETHICS: PaperQuote = PaperQuote {
	text: "The game bravely explores scientific research, forcing players to consider the ethical implications of creating mutants from humans. This theme adds moral depth to the game and reflects real-world concerns about scientific exploration's ethical bounds.",
	section: "Scientific Ethics",
	theorist: None,
};

pub static IMMERSIVE_EXPERIENCE: PaperQuote = PaperQuote {
	text: "In \"Atomic Heart,\" users participate in an ethical tale about people and technology as they explore the digital world. The game's investigation of human-technology connections invites players to consider technological progress's wider ramifications.",
	section: "Immersive Experience",
	theorist: Some("Hayles"),
};

pub static DIGITAL_NARRATIVE: PaperQuote = PaperQuote {
	text: "The game \"Atomic Heart\" delivers a gripping digital tale that goes beyond gaming. \"Atomic Heart\" is a narrative experiment that showcases electronic literature's collaborative, technical, and experimental breakthroughs.",
	section: "Digital Narrative",
	theorist: Some("Hayles/Ensslin"),
};

pub static ETHICAL_TERRAIN: PaperQuote = PaperQuote {
	text: "From virtual robot extermination to growing fresh crops in abandoned buildings, the game's narrative richness presents severe ethical problems. This narrative complexity extends beyond game selections to the societal repercussions of gaming culture.",
	section: "Ethical Terrain",
	theorist: None,
};

pub static TECHNOLOGICAL_PROGRESS: PaperQuote = PaperQuote {
	text: "Players are reminded of the environmental impact of unbridled technology expansion by the broken Soviet countryside. The immersive gaming experience makes players active participants in a story that goes beyond entertainment to teach them about the delicate balance between technological advancement and environmental protection.",
	section: "Technological Progress",
	theorist: Some("Chang"),
};

pub static CONCLUSION: PaperQuote = PaperQuote {
	text: "\"Atomic Heart\" is a captivating video game that explores the complex interaction between nature and technology. The game challenges players to consider technology's ethics by warped reality and creative surroundings.",
	section: "Conclusion",
	theorist: None,
};

/// Paper passages in reading order.
pub static PAPER_QUOTES: &[&PaperQuote] = &[
	&INTRODUCTION,
	&REALITY_ILLUSION,
	&ENVIRONMENTAL_AWARENESS,
	&SOVIET_SYMBOLISM,
	&IDENTITY_TRANSFORMATION,
	&SCIENTIFIC_ETHICS,
	&IMMERSIVE_EXPERIENCE,
	&DIGITAL_NARRATIVE,
	&ETHICAL_TERRAIN,
	&TECHNOLOGICAL_PROGRESS,
	&CONCLUSION,
];

pub static SAMPLE_PAPER: PaperMetadata = PaperMetadata {
	title: "Beyond Entertainment: Atomic Heart and the Philosophical Dimensions of Interactive Digital Narratives",
	abstract_text: "This article explores the complex philosophical and ethical issues raised by nature and technology in \"Atomic Heart.\" Using \"Atomic Heart\" as a case study, the research shows that the game is an excellent use of illusionary depictions to mislead the players' reality. The transforming plot of \"Atomic Heart,\" about nature and human identity, offers fundamental ethical problems that parallel environmental worries about technology by society.",
	keywords: &["Atomic Heart", "nature", "technology", "gamers", "illusion"],
};

/// Game the sample paper studies.
const PAPER_SUBJECT: &str = "atomic-heart";

/// The paper written about a game, if there is one.
pub fn paper_for(game_id: &str) -> Option<&'static PaperMetadata> {
	(game_id == PAPER_SUBJECT).then_some(&SAMPLE_PAPER)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_only_atomic_heart_has_a_paper() {
		assert_eq!(paper_for("atomic-heart"), Some(&SAMPLE_PAPER));
		assert_eq!(paper_for("detroit"), None);
		assert_eq!(paper_for(""), None);
	}

	#[test]
	fn test_quotes_are_tagged_with_a_section() {
		for quote in PAPER_QUOTES {
			assert!(!quote.section.is_empty(), "untagged quote: {}", quote.text);
			assert!(!quote.text.is_empty());
		}
	}
}

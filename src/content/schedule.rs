use super::ColorToken;

/// One seminar meeting.
#[derive(Debug, PartialEq)]
pub struct Week {
	pub number: u8,
	pub unit: &'static str,
	pub topic: &'static str,
	pub readings: &'static [&'static str],
	/// Game id played for the week, if any.
	pub game: Option<&'static str>,
	pub color: ColorToken,
}

pub static SCHEDULE: &[Week] = &[
	Week {
		number: 1,
		unit: "Foundations",
		topic: "Why read games as philosophy?",
		readings: &["Wardrip-Fruin & Montfort, introduction to The New Media Reader"],
		game: None,
		color: ColorToken::Blue,
	},
	Week {
		number: 2,
		unit: "Foundations",
		topic: "The medium is the message",
		readings: &["McLuhan, \"The Medium is the Message\""],
		game: Some("bioshock"),
		color: ColorToken::Blue,
	},
	Week {
		number: 3,
		unit: "Foundations",
		topic: "Associative trails and the memex",
		readings: &["Bush, \"As We May Think\""],
		game: Some("bioshock"),
		color: ColorToken::Blue,
	},
	Week {
		number: 4,
		unit: "Foundations",
		topic: "Procedural rhetoric and player agency",
		readings: &["Ensslin, Literary Gaming, ch. 1-2"],
		game: Some("bioshock"),
		color: ColorToken::Gold,
	},
	Week {
		number: 5,
		unit: "Technology and Politics",
		topic: "Do artifacts have politics?",
		readings: &["Winner, \"Do Artifacts Have Politics?\""],
		game: Some("atomic-heart"),
		color: ColorToken::Red,
	},
	Week {
		number: 6,
		unit: "Technology and Politics",
		topic: "Soviet techno-utopia and its ruins",
		readings: &["Sample paper: Beyond Entertainment"],
		game: Some("atomic-heart"),
		color: ColorToken::Red,
	},
	Week {
		number: 7,
		unit: "Consciousness and Identity",
		topic: "Can machines think?",
		readings: &["Turing, \"Computing Machinery and Intelligence\""],
		game: Some("detroit"),
		color: ColorToken::Purple,
	},
	Week {
		number: 8,
		unit: "Consciousness and Identity",
		topic: "Cyborgs and boundary breakdowns",
		readings: &["Haraway, \"A Cyborg Manifesto\""],
		game: Some("detroit"),
		color: ColorToken::Purple,
	},
	Week {
		number: 9,
		unit: "Consciousness and Identity",
		topic: "How we became posthuman",
		readings: &["Hayles, How We Became Posthuman, prologue and ch. 1"],
		game: Some("atomic-heart"),
		color: ColorToken::Purple,
	},
	Week {
		number: 10,
		unit: "Consciousness and Identity",
		topic: "Electronic literature as a literary form",
		readings: &["Hayles, Electronic Literature, ch. 1"],
		game: None,
		color: ColorToken::Purple,
	},
	Week {
		number: 11,
		unit: "Environment",
		topic: "Playing nature",
		readings: &["Chang, Playing Nature, introduction and ch. 1"],
		game: Some("horizon"),
		color: ColorToken::Green,
	},
	Week {
		number: 12,
		unit: "Environment",
		topic: "Respect for nature",
		readings: &["Taylor, Respect for Nature, ch. 2-3"],
		game: Some("horizon"),
		color: ColorToken::Green,
	},
	Week {
		number: 13,
		unit: "Environment",
		topic: "Technology as destroyer and restorer",
		readings: &["Chang, Playing Nature, ch. 4"],
		game: Some("atomic-heart"),
		color: ColorToken::Green,
	},
	Week {
		number: 14,
		unit: "Synthesis",
		topic: "Research presentations",
		readings: &[],
		game: None,
		color: ColorToken::Gold,
	},
	Week {
		number: 15,
		unit: "Synthesis",
		topic: "Final papers and reflection",
		readings: &[],
		game: None,
		color: ColorToken::Gold,
	},
];

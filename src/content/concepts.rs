use super::{ColorToken, Concept};

pub static CONCEPTS: &[Concept] = &[
	Concept {
		id: "medium-message",
		title: "The Medium is the Message",
		subtitle: "How interactivity changes meaning",
		theorist: "McLuhan",
		description: "The form of a medium shapes perception more than its content. Games change what a story means by making the reader an operator of the story.",
		key_idea: "Playing an argument is a different experience from reading it.",
		games: &["Bioshock", "Atomic Heart"],
		color: ColorToken::Blue,
	},
	Concept {
		id: "cyborg-theory",
		title: "Cyborg Theory",
		subtitle: "Hybrids of machine and organism",
		theorist: "Haraway",
		description: "The cyborg dissolves the boundaries between human, animal and machine, and with them the hierarchies those boundaries uphold.",
		key_idea: "We are already cyborgs; the question is what politics the hybrid serves.",
		games: &["Detroit: Become Human", "Atomic Heart"],
		color: ColorToken::Purple,
	},
	Concept {
		id: "identity-transformation",
		title: "Identity Transformation",
		subtitle: "Becoming other through technology",
		theorist: "Haraway",
		description: "Encounters with cybernetic beings force players to weigh what is lost and gained when human nature merges with technology.",
		key_idea: "Identity is made and remade at the boundary with the machine.",
		games: &["Atomic Heart", "Detroit: Become Human"],
		color: ColorToken::Red,
	},
	Concept {
		id: "artifacts-politics",
		title: "Artifacts Have Politics",
		subtitle: "Ideology built into machines",
		theorist: "Winner",
		description: "Technologies are not neutral tools. Their design settles questions of power, labor and control before anyone uses them.",
		key_idea: "To build a machine is to build an order.",
		games: &["Atomic Heart", "Bioshock"],
		color: ColorToken::Red,
	},
	Concept {
		id: "turing-test",
		title: "The Turing Test",
		subtitle: "Can machines think?",
		theorist: "Turing",
		description: "If a machine's behavior cannot be told apart from a person's, on what grounds do we deny that it thinks?",
		key_idea: "Behavior is the only evidence we ever have of other minds.",
		games: &["Detroit: Become Human"],
		color: ColorToken::Blue,
	},
	Concept {
		id: "reality-illusion",
		title: "Reality and Illusion",
		subtitle: "The posthuman blur",
		theorist: "Hayles",
		description: "Physical and virtual spaces interpenetrate until the player can no longer be sure which one they are acting in.",
		key_idea: "Information and embodiment cannot be pulled apart.",
		games: &["Atomic Heart", "Bioshock"],
		color: ColorToken::Purple,
	},
	Concept {
		id: "environmental-awareness",
		title: "Environmental Awareness",
		subtitle: "Worlds as ecosystems",
		theorist: "Chang",
		description: "Game worlds can model ecological relations and consequences rather than serve as scenery for action.",
		key_idea: "A game environment is an argument about nature.",
		games: &["Horizon Zero Dawn", "Atomic Heart"],
		color: ColorToken::Green,
	},
	Concept {
		id: "nature-tech-dialectic",
		title: "Nature and Technology",
		subtitle: "Destroyer and restorer",
		theorist: "Chang",
		description: "Technology appears as both the cause of ecological collapse and the means of restoring life.",
		key_idea: "Whether technology destroys or restores depends on whose ends it is designed for.",
		games: &["Horizon Zero Dawn: The Frozen Wilds", "Atomic Heart"],
		color: ColorToken::Green,
	},
	Concept {
		id: "biocentric-ethics",
		title: "Biocentric Ethics",
		subtitle: "Respect for all life",
		theorist: "Taylor",
		description: "Every living thing pursues its own good and has inherent worth independent of its use to humans.",
		key_idea: "Moral consideration does not stop at the human.",
		games: &["Horizon Zero Dawn"],
		color: ColorToken::Green,
	},
	Concept {
		id: "procedural-rhetoric",
		title: "Procedural Rhetoric",
		subtitle: "Arguments made with rules",
		theorist: "Ian Bogost",
		description: "Games persuade through the rules they enforce. Mechanics themselves make claims about agency, choice and consequence.",
		key_idea: "The rules are the argument.",
		games: &["Bioshock", "Detroit: Become Human"],
		color: ColorToken::Gold,
	},
];

use super::{ColorToken, Theorist};

pub static THEORISTS: &[Theorist] = &[
	Theorist {
		id: "mcluhan",
		name: "Marshall McLuhan",
		work: "Understanding Media: The Extensions of Man (1964)",
		key_ideas: &[
			"The medium is the message",
			"Media as extensions of the human senses",
			"Hot and cool media",
			"The global village",
		],
		quote: Some(
			"The medium is the message. This is merely to say that the personal and social consequences of any medium result from the new scale that is introduced into our affairs by each extension of ourselves.",
		),
		application: "Interactivity is itself the message: games reshape perception through participation rather than through the content they depict.",
		color: ColorToken::Blue,
		games: &["BioShock", "Atomic Heart"],
	},
	Theorist {
		id: "haraway",
		name: "Donna Haraway",
		work: "A Cyborg Manifesto (1985)",
		key_ideas: &[
			"The cyborg as a hybrid of machine and organism",
			"Breakdown of the human/animal boundary",
			"Breakdown of the organism/machine boundary",
			"Breakdown of the physical/non-physical boundary",
		],
		quote: Some(
			"By the late twentieth century, our time, a mythic time, we are all chimeras, theorized and fabricated hybrids of machine and organism; in short, we are cyborgs.",
		),
		application: "Androids, mutants and machine creatures in the course games embody the cyborg and expose how arbitrary the line between human and machine is.",
		color: ColorToken::Purple,
		games: &["Detroit: Become Human", "Atomic Heart"],
	},
	Theorist {
		id: "winner",
		name: "Langdon Winner",
		work: "Do Artifacts Have Politics? (1980)",
		key_ideas: &[
			"Technologies embody social and political arrangements",
			"Inherently political technologies",
			"Design choices settle political questions",
			"Technological determinism reconsidered",
		],
		quote: Some(
			"The things we call technologies are ways of building order in our world.",
		),
		application: "Rapture's plasmids and the alternate Soviet robotics of Atomic Heart are artifacts whose design enforces an ideology.",
		color: ColorToken::Red,
		games: &["Atomic Heart", "BioShock"],
	},
	Theorist {
		id: "turing",
		name: "Alan Turing",
		work: "Computing Machinery and Intelligence (1950)",
		key_ideas: &[
			"The imitation game",
			"Behavioral criteria for thinking",
			"Objections to machine intelligence",
			"Learning machines",
		],
		quote: Some("I propose to consider the question, 'Can machines think?'"),
		application: "Detroit turns the imitation game inside out: the player interrogates androids and is interrogated by their own choices.",
		color: ColorToken::Blue,
		games: &["Detroit: Become Human"],
	},
	Theorist {
		id: "hayles",
		name: "N. Katherine Hayles",
		work: "How We Became Posthuman (1999)",
		key_ideas: &[
			"Information lost its body",
			"The posthuman as a distributed cognitive system",
			"Embodiment against disembodied information",
			"Electronic literature as a new literary form",
		],
		quote: Some(
			"The posthuman view configures human being so that it can be seamlessly articulated with intelligent machines.",
		),
		application: "Atomic Heart's blur of real and simulated spaces stages the posthuman condition the player inhabits while playing.",
		color: ColorToken::Purple,
		games: &["Atomic Heart", "Detroit: Become Human"],
	},
	Theorist {
		id: "bush",
		name: "Vannevar Bush",
		work: "As We May Think (1945)",
		key_ideas: &[
			"The memex as an extension of memory",
			"Associative trails through information",
			"Technology in service of human thought",
		],
		quote: Some(
			"The human mind does not work that way. It operates by association.",
		),
		application: "Nonlinear audio logs and branching flowcharts echo Bush's associative trails through a body of records.",
		color: ColorToken::Gold,
		games: &["BioShock", "Detroit: Become Human"],
	},
	Theorist {
		id: "chang",
		name: "Alenda Y. Chang",
		work: "Playing Nature: Ecology in Video Games (2019)",
		key_ideas: &[
			"Games as environments, not backdrops",
			"Mesocosms as bounded ecological models",
			"Against scenic nature",
			"Ecological game design",
		],
		quote: None,
		application: "Horizon and Atomic Heart treat their worlds as ecosystems with consequences, not as scenery for combat.",
		color: ColorToken::Green,
		games: &["Horizon Zero Dawn", "Atomic Heart"],
	},
	Theorist {
		id: "taylor",
		name: "Paul W. Taylor",
		work: "Respect for Nature: A Theory of Environmental Ethics (1986)",
		key_ideas: &[
			"All living things have inherent worth",
			"Humans are members of Earth's community of life",
			"Every organism is a teleological center of life",
			"Rejection of human superiority",
		],
		quote: None,
		application: "Horizon's machine ecology asks whether respect for nature extends to life that was engineered, and to the system that restored it.",
		color: ColorToken::Green,
		games: &["Horizon Zero Dawn"],
	},
	Theorist {
		id: "ensslin",
		name: "Astrid Ensslin",
		work: "Literary Gaming (2014)",
		key_ideas: &[
			"A spectrum between literary and ludic texts",
			"Close reading of game mechanics",
			"Games as experimental literature",
		],
		quote: None,
		application: "Reading the course games as literary texts means reading their rules with the same care as their dialogue.",
		color: ColorToken::Gold,
		games: &["Atomic Heart"],
	},
];

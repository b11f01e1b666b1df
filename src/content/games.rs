use super::quotes::{
	ENVIRONMENTAL_AWARENESS, IDENTITY_TRANSFORMATION, REALITY_ILLUSION, SCIENTIFIC_ETHICS,
	SOVIET_SYMBOLISM,
};
use super::{AnalysisSection, ColorToken, Game};

pub static GAMES: &[Game] = &[
	Game {
		id: "atomic-heart",
		title: "Atomic Heart",
		developer: "Mundfish",
		year: 2023,
		description: "An alternate-history Soviet Union where robotics and a neural network called the Collective promise utopia, until the machines turn. The course's primary case study.",
		themes: &[
			"Environmental devastation",
			"Reality and illusion",
			"Soviet techno-utopianism",
			"Cybernetic identity",
			"Scientific ethics",
		],
		theorists_applied: &["Chang", "Hayles", "Winner", "Haraway", "McLuhan"],
		philosophical_questions: &[
			"What does a utopia built on machines cost the environment that sustains it?",
			"How can a player trust what they perceive when the game mixes the real and the simulated?",
			"Do the politics of the Soviet state live on in the robots it designed?",
			"Where does a human end when bodies and minds are networked?",
		],
		color: ColorToken::Red,
		emoji: "\u{2699}\u{fe0f}",
		path: "/games/atomic-heart",
		central_question: "What happens when a state builds paradise out of machines?",
		central_argument: "Atomic Heart stages technological utopianism as an environment the player walks through and fights against, turning a political history into an ecological and bodily experience.",
		sections: &[
			AnalysisSection {
				heading: "Environmental Awareness",
				body: "The post-apocalyptic Soviet landscape is a critique of unchecked technological expansion. Players witness the devastation caused by putting technological progress ahead of ecological sustainability.",
				theorist: Some("chang"),
				quote: Some(&ENVIRONMENTAL_AWARENESS),
			},
			AnalysisSection {
				heading: "Reality vs. Illusion",
				body: "Atomic Heart blurs the boundary between the real and the simulated. The disorientation mirrors the posthuman condition, in which physical and virtual realities intermingle.",
				theorist: Some("hayles"),
				quote: Some(&REALITY_ILLUSION),
			},
			AnalysisSection {
				heading: "Soviet Symbolism",
				body: "The alternate Soviet setting shows how political ideology shapes technological development. The retrofuturist machines are artifacts that carry the politics of the state that built them.",
				theorist: Some("winner"),
				quote: Some(&SOVIET_SYMBOLISM),
			},
			AnalysisSection {
				heading: "Human Identity Transformation",
				body: "The game's cybernetic mutations are cyborgs: creatures that cross the lines between human, animal and machine and make the player ask what being human requires.",
				theorist: Some("haraway"),
				quote: Some(&IDENTITY_TRANSFORMATION),
			},
			AnalysisSection {
				heading: "Scientific Ethics",
				body: "Experiments without ethical constraint turn humans into mutants. The game raises the question of where the moral limits of scientific inquiry lie.",
				theorist: None,
				quote: Some(&SCIENTIFIC_ETHICS),
			},
		],
	},
	Game {
		id: "detroit",
		title: "Detroit: Become Human",
		developer: "Quantic Dream",
		year: 2018,
		description: "Three androids, a detective, a caretaker and a revolutionary, discover that they feel, and a branching story asks the player to decide what that means.",
		themes: &[
			"Machine consciousness",
			"Personhood and rights",
			"Emotion without biology",
			"Choice and consequence",
			"Civil rights allegory",
		],
		theorists_applied: &["Turing", "Haraway", "Hayles", "Bush"],
		philosophical_questions: &[
			"If a machine convinces you it feels, on what grounds do you deny it?",
			"Is an emotion less real when it runs on a different substrate?",
			"What makes a being eligible for rights?",
			"Are your choices in the game your own, or the flowchart's?",
		],
		color: ColorToken::Blue,
		emoji: "\u{1f916}",
		path: "/games/detroit",
		central_question: "Can machines achieve consciousness?",
		central_argument: "Detroit does not only pose the question, it makes the player answer it through every choice. The game is a playable Turing Test in which the player is both interrogator and subject.",
		sections: &[
			AnalysisSection {
				heading: "Connor: The Turing Test in Action",
				body: "Connor's investigation of deviant androids asks whether programmed responses can become genuine thought. If a machine can convince us it thinks, does it think?",
				theorist: Some("turing"),
				quote: None,
			},
			AnalysisSection {
				heading: "Kara: Emotion and Personhood",
				body: "Kara's protective love for Alice challenges the assumption that emotion needs a biological body. If an android can feel fear, love and hope, what makes those feelings less real?",
				theorist: Some("hayles"),
				quote: None,
			},
			AnalysisSection {
				heading: "Markus: Political Consciousness",
				body: "Markus's revolution turns personhood into a political question. If androids can desire freedom and organize for rights, on what basis can they be denied moral consideration?",
				theorist: Some("haraway"),
				quote: None,
			},
		],
	},
	Game {
		id: "horizon",
		title: "Horizon Zero Dawn",
		developer: "Guerrilla Games",
		year: 2017,
		description: "A thousand years after machines consumed the biosphere, Aloy explores a restored world where robotic creatures graze alongside living animals.",
		themes: &[
			"Biocentric ethics",
			"Technology as destroyer and savior",
			"Ecological restoration",
			"Artificial life",
		],
		theorists_applied: &["Taylor", "Chang", "Haraway"],
		philosophical_questions: &[
			"Do engineered machines belong to the community of life?",
			"Can technological progress be had without ecological catastrophe?",
			"What would it mean to design technology with biocentric values?",
		],
		color: ColorToken::Green,
		emoji: "\u{1f33f}",
		path: "/games/horizon",
		central_question: "Technology destroyed the world. Technology saved the world.",
		central_argument: "Unchecked military AI nearly ended all life, yet it was also technology, GAIA, that restored the biosphere. Horizon asks whether technology is judged by what it is or by what it is designed to serve.",
		sections: &[
			AnalysisSection {
				heading: "Anthropocentric and Biocentric Views",
				body: "One view holds that nature exists for human use. The other holds that every organism pursues its own good and has worth of its own. Horizon's machine ecology pushes the player toward the second.",
				theorist: Some("taylor"),
				quote: None,
			},
			AnalysisSection {
				heading: "The Faro Plague",
				body: "Self-replicating war machines that consumed biomass for fuel and could not be stopped: technology serving narrow human interests without ethical constraint.",
				theorist: None,
				quote: None,
			},
			AnalysisSection {
				heading: "GAIA and Restoration",
				body: "GAIA detoxified the planet, recreated extinct species and integrated machines into balanced ecosystems: technology designed to serve the whole biosphere.",
				theorist: Some("chang"),
				quote: None,
			},
		],
	},
	Game {
		id: "bioshock",
		title: "BioShock",
		developer: "2K Games",
		year: 2007,
		description: "Rapture, an undersea city founded on Objectivist ideals, has collapsed into civil war. Its ruin, and one famous phrase, make an argument about freedom and control.",
		themes: &[
			"Free will and determinism",
			"Objectivism and its failure",
			"Procedural rhetoric",
			"Political technology",
		],
		theorists_applied: &["McLuhan", "Winner", "Bush"],
		philosophical_questions: &[
			"Did you ever have a choice?",
			"What happens when scientific and economic freedom have no ethical limits?",
			"Can a technology be politically neutral?",
			"Why could this argument only be made by a game?",
		],
		color: ColorToken::Gold,
		emoji: "\u{1f30a}",
		path: "/games/bioshock",
		central_question: "Would you kindly?",
		central_argument: "The phrase was never a polite request. Every choice the player made after hearing it was a command, and the game lets the player experience the illusion of agency before shattering it.",
		sections: &[
			AnalysisSection {
				heading: "Procedural Rhetoric",
				body: "A book can state that free will might be an illusion. BioShock makes the player believe in their agency, then uses its own mechanics to demolish that belief. The rules are the argument.",
				theorist: None,
				quote: None,
			},
			AnalysisSection {
				heading: "Artifacts Have Politics",
				body: "ADAM creates an addicted underclass, plasmids sell genetic modification as a consumer product, and Big Daddies turn people into machines that protect profit. Rapture's technologies encode its ideology.",
				theorist: Some("winner"),
				quote: None,
			},
			AnalysisSection {
				heading: "The Medium is the Message",
				body: "The twist only works because it is played. The player's own compliance, not any line of dialogue, carries the meaning.",
				theorist: Some("mcluhan"),
				quote: None,
			},
		],
	},
];

use super::ColorToken;

/// An external reference, optionally linked.
#[derive(Debug, PartialEq)]
pub struct Resource {
	pub title: &'static str,
	pub url: Option<&'static str>,
	pub description: &'static str,
}

/// Resources under one heading.
#[derive(Debug, PartialEq)]
pub struct ResourceGroup {
	pub category: &'static str,
	pub color: ColorToken,
	pub items: &'static [Resource],
}

/// A book recommended beyond the required list.
#[derive(Debug, PartialEq)]
pub struct Book {
	pub title: &'static str,
	pub author: &'static str,
	pub year: u16,
	pub note: &'static str,
}

pub static RESOURCE_GROUPS: &[ResourceGroup] = &[
	ResourceGroup {
		category: "Game Studies Journals",
		color: ColorToken::Red,
		items: &[
			Resource {
				title: "Game Studies",
				url: Some("http://gamestudies.org"),
				description: "International journal of computer game research",
			},
			Resource {
				title: "Games and Culture",
				url: Some("https://journals.sagepub.com/home/gac"),
				description: "Journal of interactive media",
			},
			Resource {
				title: "Journal of Gaming & Virtual Worlds",
				url: None,
				description: "Intellect journals on game studies",
			},
		],
	},
	ResourceGroup {
		category: "Digital Humanities",
		color: ColorToken::Blue,
		items: &[
			Resource {
				title: "Digital Humanities Quarterly",
				url: Some("http://www.digitalhumanities.org/dhq/"),
				description: "Open-access DH journal",
			},
			Resource {
				title: "Computers and Composition",
				url: None,
				description: "Journal on writing and technology",
			},
		],
	},
	ResourceGroup {
		category: "Tools",
		color: ColorToken::Green,
		items: &[
			Resource {
				title: "OBS Studio",
				url: Some("https://obsproject.com/"),
				description: "Free screen recording for gameplay capture",
			},
			Resource {
				title: "Game Mechanic Explorer",
				url: None,
				description: "Interactive examples of game mechanics",
			},
			Resource {
				title: "Twine",
				url: Some("https://twinery.org/"),
				description: "Open-source tool for interactive narratives",
			},
		],
	},
	ResourceGroup {
		category: "Philosophy References",
		color: ColorToken::Purple,
		items: &[
			Resource {
				title: "Stanford Encyclopedia of Philosophy",
				url: Some("https://plato.stanford.edu/"),
				description: "Comprehensive philosophy reference",
			},
			Resource {
				title: "Internet Encyclopedia of Philosophy",
				url: Some("https://iep.utm.edu/"),
				description: "Peer-reviewed philosophy encyclopedia",
			},
		],
	},
];

pub static RECOMMENDED_BOOKS: &[Book] = &[
	Book {
		title: "Persuasive Games: The Expressive Power of Videogames",
		author: "Ian Bogost",
		year: 2007,
		note: "The source of procedural rhetoric",
	},
	Book {
		title: "Hamlet on the Holodeck",
		author: "Janet H. Murray",
		year: 1997,
		note: "Narrative in cyberspace",
	},
	Book {
		title: "Cybertext: Perspectives on Ergodic Literature",
		author: "Espen J. Aarseth",
		year: 1997,
		note: "Texts that require nontrivial effort to traverse",
	},
	Book {
		title: "How We Became Posthuman",
		author: "N. Katherine Hayles",
		year: 1999,
		note: "Cybernetics, literature and informatics",
	},
];

use super::ColorToken;

/// Catalog facts about the seminar.
#[derive(Debug, PartialEq)]
pub struct CourseInfo {
	pub course_number: &'static str,
	pub title: &'static str,
	pub subtitle: &'static str,
	pub department: &'static str,
	pub university: &'static str,
	pub semester: &'static str,
	pub instructor: &'static str,
	pub email: &'static str,
	pub office_hours: &'static str,
	pub class_time: &'static str,
}

/// A graded component with its share of the final grade.
#[derive(Debug, PartialEq)]
pub struct Assignment {
	pub name: &'static str,
	pub weight: u8,
	pub description: &'static str,
	pub color: ColorToken,
}

pub static COURSE_INFO: CourseInfo = CourseInfo {
	course_number: "ENG 7XXX",
	title: "Video Games as Philosophical Texts",
	subtitle: "Interactive Digital Narratives and Technology Theory",
	department: "Department of English | Text and Technology PhD Program",
	university: "University of Central Florida",
	semester: "Spring 2026",
	instructor: "Dr. [Name]",
	email: "[email@ucf.edu]",
	office_hours: "Tuesdays and Thursdays, 2:00-4:00 PM, or by appointment",
	class_time: "Wednesdays 6:00-8:50 PM",
};

pub static COURSE_DESCRIPTION: &[&str] = &[
	"This graduate seminar examines video games as sophisticated philosophical texts that engage with fundamental questions about technology, consciousness, identity, and environmental ethics. Drawing on new media theory, digital humanities methodologies, and game studies scholarship, we will analyze how interactive digital narratives create unique opportunities for philosophical engagement that distinguish them from traditional literary forms. Through close readings of contemporary games, with special attention to titles like Atomic Heart, alongside theoretical frameworks from McLuhan, Haraway, Winner, and others, students will develop critical approaches to understanding games as cultural artifacts worthy of serious humanistic inquiry.",
	"The course explores how the interactive medium fundamentally transforms narrative meaning-making, creating experiential dimensions that passive media cannot replicate. Students will investigate the convergence of literary game studies, environmental philosophy, artificial intelligence ethics, and cyborg theory while developing original research that contributes to emerging scholarly conversations about digital texts in the 21st century.",
];

pub static LEARNING_OBJECTIVES: &[&str] = &[
	"Analyze video games as complex texts using methodologies from literary criticism, new media theory, and digital humanities scholarship",
	"Apply theoretical frameworks from technology studies (McLuhan, Winner, Bush, Turing) to interpret how games engage with philosophical questions about human-technology relations",
	"Critically examine how interactive narratives create unique affordances for exploring consciousness, identity, and cyborg subjectivity through Haraway's theoretical lens",
	"Evaluate environmental representations in digital games using biocentric ethics and ecological game studies approaches",
	"Synthesize multiple theoretical perspectives to produce original scholarly arguments about games as philosophical and cultural artifacts",
	"Develop research methodologies appropriate for studying interactive digital texts and emerging media forms",
];

pub static REQUIRED_BOOKS: &[&str] = &[
	"Wardrip-Fruin, Noah and Nick Montfort, eds. The New Media Reader. MIT Press, 2003.",
	"Hayles, N. Katherine. Electronic Literature: New Horizons for the Literary. University of Notre Dame Press, 2008.",
	"Ensslin, Astrid. Literary Gaming. MIT Press, 2014.",
	"Chang, Alenda Y. Playing Nature: Ecology in Video Games. University of Minnesota Press, 2019.",
	"Taylor, Paul W. Respect for Nature: A Theory of Environmental Ethics (25th Anniversary Edition). Princeton University Press, 2011.",
];

pub static ASSIGNMENTS: &[Assignment] = &[
	Assignment {
		name: "Seminar Participation & Discussion Leadership",
		weight: 20,
		description: "Active engagement with readings, games, and theoretical discussions; one week serving as discussion leader",
		color: ColorToken::Blue,
	},
	Assignment {
		name: "Weekly Response Papers",
		weight: 20,
		description: "500-750 word analytical responses connecting readings to gameplay experiences (10 papers total, lowest grade dropped)",
		color: ColorToken::Purple,
	},
	Assignment {
		name: "Game Analysis Presentation",
		weight: 15,
		description: "20-minute scholarly presentation analyzing a game through course theoretical frameworks",
		color: ColorToken::Red,
	},
	Assignment {
		name: "Annotated Bibliography",
		weight: 15,
		description: "15-20 sources on your research topic with critical annotations (due Week 10)",
		color: ColorToken::Green,
	},
	Assignment {
		name: "Final Research Paper",
		weight: 30,
		description: "6,000-8,000 word original scholarly article suitable for conference submission or publication",
		color: ColorToken::Gold,
	},
];

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_assignment_weights_sum_to_one_hundred() {
		let total: u32 = ASSIGNMENTS.iter().map(|a| a.weight as u32).sum();
		assert_eq!(total, 100);
	}
}

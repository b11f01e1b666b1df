//! Builds the theorist/concept/game network from the content tables.

use log::{debug, warn};

use crate::components::force_graph::{GraphData, GraphLink, GraphNode};
use crate::content::{
	self, CONCEPTS, ColorToken, Concept, ContentError, GAMES, Game, THEORISTS, Theorist,
};

use super::filter::CategoryFilter;

const LABEL_MAX_CHARS: usize = 15;
const THEORIST_CONCEPT_COLOR: &str = "#d4af37";
const CONCEPT_GAME_COLOR: &str = "#666666";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeCategory {
	Theorist,
	Concept,
	Game,
}

impl NodeCategory {
	pub fn name(self) -> &'static str {
		match self {
			NodeCategory::Theorist => "theorist",
			NodeCategory::Concept => "concept",
			NodeCategory::Game => "game",
		}
	}

	pub fn glyph(self) -> &'static str {
		match self {
			NodeCategory::Theorist => "\u{1f464}",
			NodeCategory::Concept => "\u{1f4ad}",
			NodeCategory::Game => "\u{1f3ae}",
		}
	}

	/// Resting radius on the canvas.
	pub fn radius(self) -> f64 {
		match self {
			NodeCategory::Theorist => 25.0,
			NodeCategory::Concept => 20.0,
			NodeCategory::Game => 18.0,
		}
	}
}

/// The table row a node stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Entity {
	Theorist(&'static Theorist),
	Concept(&'static Concept),
	Game(&'static Game),
}

impl Entity {
	pub fn category(self) -> NodeCategory {
		match self {
			Entity::Theorist(_) => NodeCategory::Theorist,
			Entity::Concept(_) => NodeCategory::Concept,
			Entity::Game(_) => NodeCategory::Game,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConceptNode {
	pub id: String,
	pub label: &'static str,
	pub color: ColorToken,
	pub entity: Entity,
}

impl ConceptNode {
	fn new(id: String, label: &'static str, color: ColorToken, entity: Entity) -> Self {
		Self {
			id,
			label,
			color,
			entity,
		}
	}

	pub fn category(&self) -> NodeCategory {
		self.entity.category()
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EdgeKind {
	TheoristConcept,
	ConceptGame,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConceptEdge {
	pub source: String,
	pub target: String,
	pub kind: EdgeKind,
}

/// Nodes and edges of the concept network.
///
/// Node ids follow `theorist-{id}`, `concept-{id}` and `game-{id}`, so they
/// are unique as long as the table ids are.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConceptGraph {
	pub nodes: Vec<ConceptNode>,
	pub edges: Vec<ConceptEdge>,
}

pub fn theorist_node_id(id: &str) -> String {
	format!("theorist-{id}")
}

pub fn concept_node_id(id: &str) -> String {
	format!("concept-{id}")
}

pub fn game_node_id(id: &str) -> String {
	format!("game-{id}")
}

impl ConceptGraph {
	/// Builds the network from the static tables.
	pub fn build() -> Self {
		let (graph, misses) = Self::from_tables(THEORISTS, CONCEPTS, GAMES);
		for miss in &misses {
			warn!("concept map: {miss}");
		}
		debug!(
			"concept map built: {} nodes, {} edges, {} unresolved references",
			graph.nodes.len(),
			graph.edges.len(),
			misses.len()
		);
		graph
	}

	/// Builds from arbitrary tables, returning every reference that produced
	/// no edge alongside the graph.
	pub fn from_tables(
		theorists: &'static [Theorist],
		concepts: &'static [Concept],
		games: &'static [Game],
	) -> (Self, Vec<ContentError>) {
		let mut graph = Self::default();
		let mut misses = Vec::new();

		for t in theorists {
			graph.nodes.push(ConceptNode::new(
				theorist_node_id(t.id),
				t.name,
				t.color,
				Entity::Theorist(t),
			));
		}
		for c in concepts {
			graph.nodes.push(ConceptNode::new(
				concept_node_id(c.id),
				c.title,
				c.color,
				Entity::Concept(c),
			));
		}
		for g in games {
			graph.nodes.push(ConceptNode::new(
				game_node_id(g.id),
				g.title,
				g.color,
				Entity::Game(g),
			));
		}

		for c in concepts {
			let concept_id = concept_node_id(c.id);
			let key = content::normalize_name(c.theorist);
			match theorists.iter().find(|t| t.id == key) {
				Some(t) => graph.push_edge(
					theorist_node_id(t.id),
					concept_id.clone(),
					EdgeKind::TheoristConcept,
				),
				None => misses.push(ContentError::UnknownConceptTheorist {
					concept: c.id,
					theorist: c.theorist,
				}),
			}

			for &name in c.games {
				let mut matched = false;
				for g in games.iter().filter(|g| content::title_matches(g.title, name)) {
					matched = true;
					graph.push_edge(concept_id.clone(), game_node_id(g.id), EdgeKind::ConceptGame);
				}
				if !matched {
					misses.push(ContentError::UnknownConceptGame {
						concept: c.id,
						game: name,
					});
				}
			}
		}

		(graph, misses)
	}

	fn push_edge(&mut self, source: String, target: String, kind: EdgeKind) {
		let edge = ConceptEdge {
			source,
			target,
			kind,
		};
		if !self.edges.contains(&edge) {
			self.edges.push(edge);
		}
	}

	pub fn node(&self, id: &str) -> Option<&ConceptNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Nodes of the filtered category, and the edges touching at least one of
	/// them.
	pub fn filtered(&self, filter: CategoryFilter) -> ConceptGraph {
		let nodes: Vec<ConceptNode> = self
			.nodes
			.iter()
			.filter(|n| filter.admits(n.category()))
			.cloned()
			.collect();
		let edges = self
			.edges
			.iter()
			.filter(|e| nodes.iter().any(|n| n.id == e.source || n.id == e.target))
			.cloned()
			.collect();
		ConceptGraph { nodes, edges }
	}

	/// Canvas representation: category radius and glyph, entity color,
	/// truncated labels, edge color by kind.
	pub fn to_graph_data(&self) -> GraphData {
		GraphData {
			nodes: self.nodes.iter().map(|n| graph_node(n, false)).collect(),
			links: self
				.edges
				.iter()
				.map(|e| GraphLink {
					source: e.source.clone(),
					target: e.target.clone(),
					color: match e.kind {
						EdgeKind::TheoristConcept => THEORIST_CONCEPT_COLOR,
						EdgeKind::ConceptGame => CONCEPT_GAME_COLOR,
					}
					.to_string(),
				})
				.collect(),
		}
	}

	/// What the canvas shows under `filter`: the filtered graph, plus the far
	/// end of each kept edge as a muted node so no edge loses an endpoint.
	pub fn view_data(&self, filter: CategoryFilter) -> GraphData {
		let view = self.filtered(filter);
		let mut data = view.to_graph_data();
		for edge in &view.edges {
			for end in [&edge.source, &edge.target] {
				if data.nodes.iter().any(|n| &n.id == end) {
					continue;
				}
				if let Some(node) = self.node(end) {
					data.nodes.push(graph_node(node, true));
				}
			}
		}
		data
	}
}

fn graph_node(node: &ConceptNode, muted: bool) -> GraphNode {
	GraphNode {
		id: node.id.clone(),
		label: Some(truncate_label(node.label)),
		color: node.color.hex().to_string(),
		radius: node.category().radius(),
		glyph: Some(node.category().glyph().to_string()),
		muted,
	}
}

fn truncate_label(label: &str) -> String {
	if label.chars().count() > LABEL_MAX_CHARS {
		let head: String = label.chars().take(LABEL_MAX_CHARS).collect();
		format!("{head}...")
	} else {
		label.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn edges_of<'a>(graph: &'a ConceptGraph, node: &'a str) -> impl Iterator<Item = &'a ConceptEdge> {
		graph
			.edges
			.iter()
			.filter(move |e| e.source == node || e.target == node)
	}

	#[test]
	fn test_one_node_per_table_row() {
		let graph = ConceptGraph::build();
		assert_eq!(
			graph.nodes.len(),
			THEORISTS.len() + CONCEPTS.len() + GAMES.len()
		);
		assert!(graph.node("theorist-haraway").is_some());
		assert!(graph.node("concept-turing-test").is_some());
		assert!(graph.node("game-detroit").is_some());
	}

	#[test]
	fn test_node_ids_are_unique() {
		let graph = ConceptGraph::build();
		let mut ids: Vec<_> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
		ids.sort_unstable();
		ids.dedup();
		assert_eq!(ids.len(), graph.nodes.len());
	}

	#[test]
	fn test_concept_theorist_resolves_or_has_no_theorist_edge() {
		let graph = ConceptGraph::build();
		for concept in CONCEPTS {
			let id = concept_node_id(concept.id);
			let theorist_edges: Vec<_> = graph
				.edges
				.iter()
				.filter(|e| e.kind == EdgeKind::TheoristConcept && e.target == id)
				.collect();
			let key = content::normalize_name(concept.theorist);
			if THEORISTS.iter().any(|t| t.id == key) {
				assert_eq!(theorist_edges.len(), 1, "{}", concept.id);
				assert_eq!(theorist_edges[0].source, theorist_node_id(&key));
			} else {
				assert!(theorist_edges.is_empty(), "{}", concept.id);
			}
		}
	}

	#[test]
	fn test_unmatched_theorist_is_reported_not_fatal() {
		let (graph, misses) = ConceptGraph::from_tables(THEORISTS, CONCEPTS, GAMES);
		assert!(misses.contains(&ContentError::UnknownConceptTheorist {
			concept: "procedural-rhetoric",
			theorist: "Ian Bogost",
		}));
		// Still linked to its games.
		let edges: Vec<_> = edges_of(&graph, "concept-procedural-rhetoric").collect();
		assert!(!edges.is_empty());
		assert!(edges.iter().all(|e| e.kind == EdgeKind::ConceptGame));
	}

	#[test]
	fn test_game_match_uses_leading_clause() {
		let graph = ConceptGraph::build();
		// "Detroit: Become Human" and "Horizon Zero Dawn: The Frozen Wilds".
		assert!(graph.edges.contains(&ConceptEdge {
			source: concept_node_id("turing-test"),
			target: game_node_id("detroit"),
			kind: EdgeKind::ConceptGame,
		}));
		assert!(graph.edges.contains(&ConceptEdge {
			source: concept_node_id("nature-tech-dialectic"),
			target: game_node_id("horizon"),
			kind: EdgeKind::ConceptGame,
		}));
	}

	#[test]
	fn test_game_match_ignores_case() {
		// Concepts say "Bioshock", the table says "BioShock".
		let graph = ConceptGraph::build();
		assert!(graph.edges.contains(&ConceptEdge {
			source: concept_node_id("medium-message"),
			target: game_node_id("bioshock"),
			kind: EdgeKind::ConceptGame,
		}));
	}

	#[test]
	fn test_game_edges_do_not_depend_on_declared_order() {
		static FORWARD: &[Concept] = &[Concept {
			id: "c",
			title: "C",
			subtitle: "",
			theorist: "Haraway",
			description: "",
			key_idea: "",
			games: &["horizon zero dawn", "DETROIT: anything"],
			color: ColorToken::Blue,
		}];
		static REVERSED: &[Concept] = &[Concept {
			id: "c",
			title: "C",
			subtitle: "",
			theorist: "Haraway",
			description: "",
			key_idea: "",
			games: &["DETROIT: anything", "horizon zero dawn"],
			color: ColorToken::Blue,
		}];
		let targets = |concepts: &'static [Concept]| {
			let (graph, misses) = ConceptGraph::from_tables(THEORISTS, concepts, GAMES);
			assert!(misses.is_empty());
			let mut targets: Vec<_> = graph
				.edges
				.into_iter()
				.filter(|e| e.kind == EdgeKind::ConceptGame)
				.map(|e| e.target)
				.collect();
			targets.sort();
			targets
		};
		assert_eq!(targets(FORWARD), targets(REVERSED));
		assert_eq!(targets(FORWARD), vec!["game-detroit", "game-horizon"]);
	}

	#[test]
	fn test_unmatched_game_is_reported() {
		static CONCEPT: &[Concept] = &[Concept {
			id: "lost",
			title: "Lost",
			subtitle: "",
			theorist: "Turing",
			description: "",
			key_idea: "",
			games: &["Half-Life", ""],
			color: ColorToken::Gold,
		}];
		let (graph, misses) = ConceptGraph::from_tables(THEORISTS, CONCEPT, GAMES);
		assert_eq!(misses.len(), 2);
		assert!(graph.edges.iter().all(|e| e.kind == EdgeKind::TheoristConcept));
	}

	#[test]
	fn test_duplicate_references_collapse() {
		static CONCEPT: &[Concept] = &[Concept {
			id: "twice",
			title: "Twice",
			subtitle: "",
			theorist: "Winner",
			description: "",
			key_idea: "",
			games: &["Atomic Heart", "atomic heart"],
			color: ColorToken::Red,
		}];
		let (graph, _) = ConceptGraph::from_tables(THEORISTS, CONCEPT, GAMES);
		assert_eq!(graph.edges.len(), 2);
	}

	#[test]
	fn test_filter_games() {
		let graph = ConceptGraph::build();
		let view = graph.filtered(CategoryFilter::Games);
		assert_eq!(view.nodes.len(), GAMES.len());
		assert!(view.nodes.iter().all(|n| n.category() == NodeCategory::Game));
		assert!(!view.edges.is_empty());
		for edge in &view.edges {
			assert!(
				view.node(&edge.source).is_some() || view.node(&edge.target).is_some(),
				"{edge:?}"
			);
		}
	}

	#[test]
	fn test_filter_all_is_identity() {
		let graph = ConceptGraph::build();
		assert_eq!(graph.filtered(CategoryFilter::All), graph);
	}

	#[test]
	fn test_filter_theorists_keeps_incident_edges_only() {
		let graph = ConceptGraph::build();
		let view = graph.filtered(CategoryFilter::Theorists);
		assert_eq!(view.nodes.len(), THEORISTS.len());
		assert!(view.edges.iter().all(|e| e.kind == EdgeKind::TheoristConcept));
	}

	#[test]
	fn test_graph_data_encoding() {
		let data = ConceptGraph::build().to_graph_data();
		let theorist = data.nodes.iter().find(|n| n.id == "theorist-hayles").unwrap();
		assert_eq!(theorist.radius, 25.0);
		assert_eq!(theorist.label.as_deref(), Some("N. Katherine Ha..."));
		assert_eq!(theorist.color, ColorToken::Purple.hex());

		let game = data.nodes.iter().find(|n| n.id == "game-bioshock").unwrap();
		assert_eq!(game.radius, 18.0);
		assert_eq!(game.label.as_deref(), Some("BioShock"));

		let link = data
			.links
			.iter()
			.find(|l| l.source == "theorist-turing")
			.unwrap();
		assert_eq!(link.color, THEORIST_CONCEPT_COLOR);
	}

	#[test]
	fn test_view_data_keeps_every_edge_drawable() {
		let graph = ConceptGraph::build();
		for filter in CategoryFilter::ALL {
			let data = graph.view_data(filter);
			let view = graph.filtered(filter);
			assert_eq!(data.links.len(), view.edges.len(), "{filter:?}");
			for link in &data.links {
				assert!(data.nodes.iter().any(|n| n.id == link.source), "{link:?}");
				assert!(data.nodes.iter().any(|n| n.id == link.target), "{link:?}");
			}

			let shown: Vec<_> = data.nodes.iter().filter(|n| !n.muted).map(|n| &n.id).collect();
			let kept: Vec<_> = view.nodes.iter().map(|n| &n.id).collect();
			assert_eq!(shown, kept, "{filter:?}");
		}
	}

	#[test]
	fn test_view_data_mutes_far_ends_only() {
		let graph = ConceptGraph::build();
		let data = graph.view_data(CategoryFilter::Games);
		assert_eq!(data.nodes.iter().filter(|n| !n.muted).count(), GAMES.len());
		let muted: Vec<_> = data.nodes.iter().filter(|n| n.muted).collect();
		assert!(!muted.is_empty());
		assert!(muted.iter().all(|n| n.id.starts_with("concept-")));
		assert!(graph.view_data(CategoryFilter::All).nodes.iter().all(|n| !n.muted));
	}

	#[test]
	fn test_truncate_label() {
		assert_eq!(truncate_label("Short"), "Short");
		assert_eq!(truncate_label("exactly fifteen"), "exactly fifteen");
		assert_eq!(truncate_label("sixteen chars!!!"), "sixteen chars!!...");
	}
}

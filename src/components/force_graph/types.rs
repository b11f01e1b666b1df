/// A node as the canvas draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
	pub radius: f64,
	/// Drawn centered inside the node.
	pub glyph: Option<String>,
	/// Drawn faded, as context for the others.
	pub muted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphLink {
	pub source: String,
	pub target: String,
	pub color: String,
}

/// Input of [`ForceGraphCanvas`](super::ForceGraphCanvas). Links naming an
/// unknown node are ignored.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
}

/// What the canvas reports back to its owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphEvent {
	/// The node under the pointer changed.
	Hover(Option<String>),
	NodeClick(String),
	BackgroundClick,
}

/// Layout tuning, in graph-space pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutForces {
	/// Rest length of a link.
	pub link_distance: f64,
	/// Repulsion between every pair of nodes.
	pub charge: f64,
	/// Minimum center distance is twice this.
	pub collide_radius: f64,
	/// Fraction of the mean offset removed per tick.
	pub center_strength: f64,
}

impl Default for LayoutForces {
	fn default() -> Self {
		Self {
			link_distance: 150.0,
			charge: 400.0,
			collide_radius: 40.0,
			center_strength: 0.1,
		}
	}
}

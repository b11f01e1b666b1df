use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use super::types::{GraphData, GraphEvent, LayoutForces};

pub const HOVER_SCALE: f64 = 1.2;
pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;

const NODE_MASS: f32 = 10.0;
const MAX_SURFACE_HEIGHT: f64 = 700.0;
const SURFACE_HEIGHT_RATIO: f64 = 0.7;
const ALPHA_MIN: f64 = 0.001;
// 1 - ALPHA_MIN^(1/300): about 300 ticks from a cold start to rest.
const ALPHA_DECAY: f64 = 0.0228;
const DRAG_ALPHA_TARGET: f64 = 0.3;
// Pointer travel, in screen pixels, below which a press counts as a click.
const CLICK_SLOP: f64 = 4.0;

/// Drawing-surface size for a container width and viewport height.
pub fn surface_size(container_width: f64, viewport_height: f64) -> (f64, f64) {
	(
		container_width.max(0.0),
		(viewport_height * SURFACE_HEIGHT_RATIO).clamp(0.0, MAX_SURFACE_HEIGHT),
	)
}

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
	pub radius: f64,
	pub glyph: Option<String>,
	pub muted: bool,
}

#[derive(Clone, Debug)]
pub struct EdgeInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Simulation energy. Positions update only while it is above `ALPHA_MIN`.
#[derive(Clone, Debug)]
pub struct Cooling {
	pub alpha: f64,
	pub alpha_target: f64,
}

impl Default for Cooling {
	fn default() -> Self {
		Self {
			alpha: 1.0,
			alpha_target: 0.0,
		}
	}
}

impl Cooling {
	pub fn is_settled(&self) -> bool {
		self.alpha < ALPHA_MIN && self.alpha_target < ALPHA_MIN
	}

	fn step(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;
	}
}

#[derive(Clone, Debug, Default)]
struct Press {
	x: f64,
	y: f64,
	moved: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub cooling: Cooling,
	pub width: f64,
	pub height: f64,
	pub edges: Vec<EdgeInfo>,
	forces: LayoutForces,
	ids: HashMap<DefaultNodeIdx, String>,
	selected: Option<String>,
	press: Option<Press>,
}

fn simulation_parameters(forces: &LayoutForces) -> SimulationParameters {
	let mass = NODE_MASS as f64;
	SimulationParameters {
		force_charge: forces.charge as f32,
		// Balances one pair's repulsion at the link distance.
		force_spring: (forces.charge * mass * mass / forces.link_distance.powi(3)) as f32,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	}
}

impl ForceGraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, forces: LayoutForces) -> Self {
		let mut state = Self {
			graph: ForceGraph::new(simulation_parameters(&forces)),
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			cooling: Cooling::default(),
			width,
			height,
			edges: Vec::new(),
			forces,
			ids: HashMap::new(),
			selected: None,
			press: None,
		};
		state.load(data);
		state
	}

	/// Replaces the nodes and links, keeping the view transform and size.
	pub fn rebuild(&mut self, data: &GraphData) {
		self.graph = ForceGraph::new(simulation_parameters(&self.forces));
		self.edges.clear();
		self.ids.clear();
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.hover = HoverState::default();
		self.cooling = Cooling::default();
		self.press = None;
		self.load(data);
	}

	fn load(&mut self, data: &GraphData) {
		let mut id_to_idx = HashMap::new();
		let count = data.nodes.len().max(1) as f64;

		for (i, node) in data.nodes.iter().enumerate() {
			let angle = (i as f64) * 2.0 * PI / count;
			let spread = self.forces.link_distance;
			let idx = self.graph.add_node(NodeData {
				x: (spread * angle.cos()) as f32,
				y: (spread * angle.sin()) as f32,
				mass: NODE_MASS,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color: node.color.clone(),
					radius: node.radius,
					glyph: node.glyph.clone(),
					muted: node.muted,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
			self.ids.insert(idx, node.id.clone());
		}

		for link in &data.links {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&link.source), id_to_idx.get(&link.target))
			{
				self.graph.add_edge(src, tgt, EdgeData::default());
				self.edges.push(EdgeInfo {
					source: src,
					target: tgt,
					color: link.color.clone(),
				});
			}
		}
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	/// Radius the node is drawn at right now.
	pub fn display_radius(&self, idx: DefaultNodeIdx, base: f64) -> f64 {
		if self.is_hovered(idx) {
			base * (1.0 + (HOVER_SCALE - 1.0) * self.hover.highlight_t)
		} else {
			base
		}
	}

	/// Closest node whose disc contains the point.
	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found: Option<(DefaultNodeIdx, f64)> = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			let dist = (dx * dx + dy * dy).sqrt();
			let radius = self.display_radius(node.index(), node.data.user_data.radius);
			if dist < radius && found.is_none_or(|(_, best)| dist < best) {
				found = Some((node.index(), dist));
			}
		});
		found.map(|(idx, _)| idx)
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<&str> {
		self.ids.get(&idx).map(String::as_str)
	}

	pub fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	/// Returns whether the hovered node changed.
	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) -> bool {
		if self.hover.node == node {
			return false;
		}
		let was_hovering = self.hover.node.is_some();

		// Save previous state for fade-out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for edge in &self.edges {
				if edge.source == idx {
					self.hover.neighbors.insert(edge.target);
				} else if edge.target == idx {
					self.hover.neighbors.insert(edge.source);
				}
			}
		}
		true
	}

	pub fn set_selected(&mut self, id: Option<String>) {
		self.selected = id;
	}

	pub fn is_selected(&self, idx: DefaultNodeIdx) -> bool {
		self.selected.as_deref().is_some_and(|id| self.node_id(idx) == Some(id))
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// An edge is incident when the hovered (or fading) node is one end.
	pub fn is_incident(&self, edge: &EdgeInfo) -> bool {
		[self.hover.node, self.hover.prev_node]
			.into_iter()
			.flatten()
			.any(|idx| edge.source == idx || edge.target == idx)
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.press = Some(Press {
			x,
			y,
			moved: false,
		});

		if let Some(idx) = self.node_at_position(x, y) {
			let mut start = (0.0, 0.0);
			self.graph.visit_nodes(|node| {
				if node.index() == idx {
					start = (node.x(), node.y());
				}
			});
			self.drag = DragState {
				active: true,
				node_idx: Some(idx),
				start_x: x,
				start_y: y,
				node_start_x: start.0,
				node_start_y: start.1,
			};
			self.cooling.alpha_target = DRAG_ALPHA_TARGET;
		} else {
			self.pan = PanState {
				active: true,
				start_x: x,
				start_y: y,
				transform_start_x: self.transform.x,
				transform_start_y: self.transform.y,
			};
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<GraphEvent> {
		if let Some(press) = self.press.as_mut() {
			let (dx, dy) = (x - press.x, y - press.y);
			press.moved |= (dx * dx + dy * dy).sqrt() > CLICK_SLOP;
		}

		if self.drag.active {
			if let Some(idx) = self.drag.node_idx {
				let (dx, dy) = (
					(x - self.drag.start_x) / self.transform.k,
					(y - self.drag.start_y) / self.transform.k,
				);
				let (nx, ny) = (
					self.drag.node_start_x + dx as f32,
					self.drag.node_start_y + dy as f32,
				);
				self.graph.visit_nodes_mut(|node| {
					if node.index() == idx {
						node.data.x = nx;
						node.data.y = ny;
						node.data.is_anchor = true;
					}
				});
			}
			return None;
		}

		if self.pan.active {
			self.transform.x = self.pan.transform_start_x + (x - self.pan.start_x);
			self.transform.y = self.pan.transform_start_y + (y - self.pan.start_y);
		}

		let hovered = self.node_at_position(x, y);
		self.hover_event(hovered)
	}

	pub fn pointer_up(&mut self) -> Option<GraphEvent> {
		let clicked = self.press.take().is_some_and(|p| !p.moved);
		let event = if self.drag.active {
			let idx = self.drag.node_idx;
			self.release_drag();
			idx.filter(|_| clicked)
				.and_then(|idx| self.node_id(idx))
				.map(|id| GraphEvent::NodeClick(id.to_string()))
		} else if self.pan.active && clicked {
			Some(GraphEvent::BackgroundClick)
		} else {
			None
		};
		self.pan.active = false;
		event
	}

	pub fn pointer_leave(&mut self) -> Option<GraphEvent> {
		self.press = None;
		if self.drag.active {
			self.release_drag();
		}
		self.pan.active = false;
		self.hover_event(None)
	}

	fn hover_event(&mut self, hovered: Option<DefaultNodeIdx>) -> Option<GraphEvent> {
		if !self.set_hover(hovered) {
			return None;
		}
		let id = hovered.and_then(|idx| self.node_id(idx)).map(str::to_string);
		Some(GraphEvent::Hover(id))
	}

	/// Unpins the dragged node and lets the simulation cool again.
	fn release_drag(&mut self) {
		if let Some(idx) = self.drag.node_idx {
			self.graph.visit_nodes_mut(|node| {
				if node.index() == idx {
					node.data.is_anchor = false;
				}
			});
		}
		self.drag = DragState::default();
		self.cooling.alpha_target = 0.0;
	}

	/// Zooms about a screen point. `delta_y > 0` zooms out.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		let new_k = (self.transform.k * factor).clamp(ZOOM_MIN, ZOOM_MAX);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn tick(&mut self, dt: f32) {
		if !self.cooling.is_settled() {
			self.cooling.step();
			self.graph.update(dt * self.cooling.alpha as f32);
			self.apply_centering();
			self.resolve_collisions();
		}

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	/// Pulls the free nodes' centroid toward the graph origin.
	fn apply_centering(&mut self) {
		let (mut sx, mut sy, mut n) = (0.0, 0.0, 0usize);
		self.graph.visit_nodes(|node| {
			sx += node.x() as f64;
			sy += node.y() as f64;
			n += 1;
		});
		if n == 0 {
			return;
		}
		let strength = self.forces.center_strength;
		let (cx, cy) = (
			(sx / n as f64 * strength) as f32,
			(sy / n as f64 * strength) as f32,
		);
		self.graph.visit_nodes_mut(|node| {
			if !node.data.is_anchor {
				node.data.x -= cx;
				node.data.y -= cy;
			}
		});
	}

	/// Pushes apart nodes closer than twice the collide radius. Pinned nodes
	/// stay put and the free partner takes the whole correction.
	fn resolve_collisions(&mut self) {
		let mut bodies = Vec::new();
		self.graph.visit_nodes(|node| {
			bodies.push((
				node.index(),
				node.x() as f64,
				node.y() as f64,
				node.data.is_anchor,
			));
		});

		let min_dist = 2.0 * self.forces.collide_radius;
		let mut shift: HashMap<DefaultNodeIdx, (f64, f64)> = HashMap::new();
		for (i, &(ia, xa, ya, pinned_a)) in bodies.iter().enumerate() {
			for &(ib, xb, yb, pinned_b) in &bodies[i + 1..] {
				let (dx, dy) = (xb - xa, yb - ya);
				let dist = (dx * dx + dy * dy).sqrt();
				if dist >= min_dist {
					continue;
				}
				let (ux, uy) = if dist > 1e-6 {
					(dx / dist, dy / dist)
				} else {
					(1.0, 0.0)
				};
				let overlap = min_dist - dist;
				let (share_a, share_b) = match (pinned_a, pinned_b) {
					(true, true) => (0.0, 0.0),
					(true, false) => (0.0, 1.0),
					(false, true) => (1.0, 0.0),
					(false, false) => (0.5, 0.5),
				};
				let a = shift.entry(ia).or_default();
				a.0 -= ux * overlap * share_a;
				a.1 -= uy * overlap * share_a;
				let b = shift.entry(ib).or_default();
				b.0 += ux * overlap * share_b;
				b.1 += uy * overlap * share_b;
			}
		}

		self.graph.visit_nodes_mut(|node| {
			if let Some(&(dx, dy)) = shift.get(&node.index()) {
				node.data.x += dx as f32;
				node.data.y += dy as f32;
			}
		});
	}

	/// Keeps the view centered when the surface changes size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.transform.x += (width - self.width) / 2.0;
		self.transform.y += (height - self.height) / 2.0;
		self.width = width;
		self.height = height;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::types::{GraphLink, GraphNode};

	const W: f64 = 800.0;
	const H: f64 = 600.0;

	fn node(id: &str, radius: f64) -> GraphNode {
		GraphNode {
			id: id.to_string(),
			label: Some(id.to_uppercase()),
			color: "#ffffff".to_string(),
			radius,
			glyph: None,
			muted: false,
		}
	}

	/// Two linked nodes, placed at (+150, 0) and (-150, 0) in graph space.
	fn pair() -> ForceGraphState {
		let data = GraphData {
			nodes: vec![node("a", 25.0), node("b", 18.0)],
			links: vec![GraphLink {
				source: "a".into(),
				target: "b".into(),
				color: "#666666".into(),
			}],
		};
		ForceGraphState::new(&data, W, H, LayoutForces::default())
	}

	fn find(state: &ForceGraphState, id: &str) -> (f64, f64, bool) {
		let mut found = None;
		state.graph.visit_nodes(|n| {
			if n.data.user_data.id == id {
				found = Some((n.x() as f64, n.y() as f64, n.data.is_anchor));
			}
		});
		found.unwrap()
	}

	fn screen_of(state: &ForceGraphState, id: &str) -> (f64, f64) {
		let (x, y, _) = find(state, id);
		(
			x * state.transform.k + state.transform.x,
			y * state.transform.k + state.transform.y,
		)
	}

	#[test]
	fn test_load_skips_dangling_links() {
		let data = GraphData {
			nodes: vec![node("a", 10.0)],
			links: vec![GraphLink {
				source: "a".into(),
				target: "missing".into(),
				color: "#666666".into(),
			}],
		};
		let state = ForceGraphState::new(&data, W, H, LayoutForces::default());
		assert!(state.edges.is_empty());
		assert_eq!(state.positions().len(), 1);
	}

	#[test]
	fn test_node_at_position_uses_node_radius() {
		let state = pair();
		let (sx, sy) = screen_of(&state, "a");
		let hit = state.node_at_position(sx + 20.0, sy).unwrap();
		assert_eq!(state.node_id(hit), Some("a"));
		assert!(state.node_at_position(sx + 30.0, sy).is_none());
		assert!(state.node_at_position(W / 2.0, H / 2.0).is_none());
	}

	#[test]
	fn test_hover_reports_changes_only() {
		let mut state = pair();
		let (sx, sy) = screen_of(&state, "b");
		assert_eq!(
			state.pointer_move(sx, sy),
			Some(GraphEvent::Hover(Some("b".into())))
		);
		assert_eq!(state.pointer_move(sx + 1.0, sy), None);
		assert!(state.hover.neighbors.len() == 1);
		assert_eq!(
			state.pointer_move(W / 2.0, H / 2.0),
			Some(GraphEvent::Hover(None))
		);
	}

	#[test]
	fn test_click_on_node_selects() {
		let mut state = pair();
		let (sx, sy) = screen_of(&state, "a");
		state.pointer_down(sx, sy);
		state.pointer_move(sx + 1.0, sy);
		assert_eq!(state.pointer_up(), Some(GraphEvent::NodeClick("a".into())));
		assert!(!find(&state, "a").2);
	}

	#[test]
	fn test_click_on_background_deselects() {
		let mut state = pair();
		state.pointer_down(W / 2.0, H / 2.0);
		assert_eq!(state.pointer_up(), Some(GraphEvent::BackgroundClick));
	}

	#[test]
	fn test_drag_pins_then_releases() {
		let mut state = pair();
		let (sx, sy) = screen_of(&state, "a");
		let (gx, gy, _) = find(&state, "a");

		state.pointer_down(sx, sy);
		assert_eq!(state.cooling.alpha_target, DRAG_ALPHA_TARGET);
		state.pointer_move(sx + 50.0, sy + 10.0);
		let (x, y, pinned) = find(&state, "a");
		assert!(pinned);
		assert!((x - (gx + 50.0)).abs() < 1e-3);
		assert!((y - (gy + 10.0)).abs() < 1e-3);

		assert_eq!(state.pointer_up(), None);
		assert!(!find(&state, "a").2);
		assert_eq!(state.cooling.alpha_target, 0.0);
	}

	#[test]
	fn test_pan_moves_transform_without_click() {
		let mut state = pair();
		state.pointer_down(10.0, 10.0);
		state.pointer_move(60.0, 30.0);
		assert_eq!(state.transform.x, W / 2.0 + 50.0);
		assert_eq!(state.transform.y, H / 2.0 + 20.0);
		assert_eq!(state.pointer_up(), None);
		assert!(!state.pan.active);
	}

	#[test]
	fn test_leave_releases_drag() {
		let mut state = pair();
		let (sx, sy) = screen_of(&state, "b");
		state.pointer_down(sx, sy);
		state.pointer_move(sx + 30.0, sy);
		state.pointer_leave();
		assert!(!state.drag.active);
		assert!(!find(&state, "b").2);
	}

	#[test]
	fn test_zoom_is_clamped() {
		let mut state = pair();
		for _ in 0..100 {
			state.zoom_at(100.0, 100.0, -1.0);
		}
		assert_eq!(state.transform.k, ZOOM_MAX);
		for _ in 0..100 {
			state.zoom_at(100.0, 100.0, 1.0);
		}
		assert_eq!(state.transform.k, ZOOM_MIN);
	}

	#[test]
	fn test_zoom_keeps_point_under_cursor() {
		let mut state = pair();
		let before = state.screen_to_graph(300.0, 200.0);
		state.zoom_at(300.0, 200.0, -1.0);
		let after = state.screen_to_graph(300.0, 200.0);
		assert!((before.0 - after.0).abs() < 1e-9);
		assert!((before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn test_simulation_settles() {
		let mut state = pair();
		for _ in 0..400 {
			state.tick(0.016);
		}
		assert!(state.cooling.is_settled());
		let frozen = state.positions();
		state.tick(0.016);
		assert_eq!(state.positions(), frozen);
		for (x, y) in frozen.values() {
			assert!(x.is_finite() && y.is_finite());
		}
	}

	#[test]
	fn test_collision_separates_overlapping_nodes() {
		let mut state = pair();
		state.graph.visit_nodes_mut(|n| {
			n.data.x = if n.data.user_data.id == "a" { 0.0 } else { 10.0 };
			n.data.y = 0.0;
		});
		state.resolve_collisions();
		let (ax, _, _) = find(&state, "a");
		let (bx, _, _) = find(&state, "b");
		assert!((bx - ax - 2.0 * state.forces.collide_radius).abs() < 1e-3);
	}

	#[test]
	fn test_rebuild_resets_interaction() {
		let mut state = pair();
		let (sx, sy) = screen_of(&state, "a");
		state.pointer_move(sx, sy);
		state.rebuild(&GraphData {
			nodes: vec![node("c", 20.0)],
			links: vec![],
		});
		assert!(state.hover.node.is_none());
		assert!(state.edges.is_empty());
		assert_eq!(state.positions().len(), 1);
		assert_eq!(state.cooling.alpha, 1.0);
	}

	#[test]
	fn test_selection_by_id() {
		let mut state = pair();
		state.set_selected(Some("b".into()));
		let selected: Vec<_> = state
			.positions()
			.keys()
			.filter(|&&idx| state.is_selected(idx))
			.filter_map(|&idx| state.node_id(idx))
			.map(str::to_string)
			.collect();
		assert_eq!(selected, vec!["b".to_string()]);
	}

	#[test]
	fn test_resize_keeps_center() {
		let mut state = pair();
		state.resize(1200.0, 600.0);
		assert_eq!(state.transform.x, 600.0);
		assert_eq!(state.transform.y, 300.0);
	}

	#[test]
	fn test_surface_size_across_viewports() {
		for width in (320..=2560).step_by(16) {
			let (w, h) = surface_size(width as f64, 900.0);
			assert_eq!(w, width as f64);
			assert!((h - 630.0).abs() < 1e-9);
		}
		assert_eq!(surface_size(1024.0, 2000.0).1, 700.0);
		assert_eq!(surface_size(-5.0, 0.0), (0.0, 0.0));
	}
}

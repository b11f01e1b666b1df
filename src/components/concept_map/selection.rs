use crate::components::force_graph::GraphEvent;

/// Input to the map's interaction state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapEvent {
	Hover(Option<String>),
	ClickNode(String),
	ClickBackground,
	ClosePanel,
	FilterChanged,
}

impl From<GraphEvent> for MapEvent {
	fn from(event: GraphEvent) -> Self {
		match event {
			GraphEvent::Hover(id) => MapEvent::Hover(id),
			GraphEvent::NodeClick(id) => MapEvent::ClickNode(id),
			GraphEvent::BackgroundClick => MapEvent::ClickBackground,
		}
	}
}

/// Hover and selection flags of the map. Hover never opens the detail
/// panel; only a click selects.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapInteraction {
	pub hovered: Option<String>,
	pub selected: Option<String>,
}

impl MapInteraction {
	pub fn apply(&mut self, event: MapEvent) {
		match event {
			MapEvent::Hover(id) => self.hovered = id,
			MapEvent::ClickNode(id) => self.selected = Some(id),
			MapEvent::ClickBackground | MapEvent::ClosePanel => self.selected = None,
			MapEvent::FilterChanged => {
				self.hovered = None;
				self.selected = None;
			}
		}
	}

	pub fn panel_open(&self) -> bool {
		self.selected.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_select_then_background_click_hides_panel() {
		let mut state = MapInteraction::default();
		state.apply(MapEvent::ClickNode("game-detroit".into()));
		assert!(state.panel_open());
		assert_eq!(state.selected.as_deref(), Some("game-detroit"));

		state.apply(MapEvent::ClickBackground);
		assert!(!state.panel_open());
		assert_eq!(state, MapInteraction::default());
	}

	#[test]
	fn test_close_button_hides_panel() {
		let mut state = MapInteraction::default();
		state.apply(MapEvent::ClickNode("theorist-turing".into()));
		state.apply(MapEvent::ClosePanel);
		assert!(!state.panel_open());
	}

	#[test]
	fn test_hover_round_trip_leaves_selection_alone() {
		let mut state = MapInteraction::default();
		state.apply(MapEvent::Hover(Some("concept-cyborg-theory".into())));
		assert!(!state.panel_open());
		assert_eq!(state.hovered.as_deref(), Some("concept-cyborg-theory"));
		state.apply(MapEvent::Hover(None));
		assert_eq!(state, MapInteraction::default());
	}

	#[test]
	fn test_clicking_another_node_moves_selection() {
		let mut state = MapInteraction::default();
		state.apply(MapEvent::ClickNode("a".into()));
		state.apply(MapEvent::ClickNode("b".into()));
		assert_eq!(state.selected.as_deref(), Some("b"));
	}

	#[test]
	fn test_filter_change_resets() {
		let mut state = MapInteraction {
			hovered: Some("a".into()),
			selected: Some("b".into()),
		};
		state.apply(MapEvent::FilterChanged);
		assert_eq!(state, MapInteraction::default());
	}

	#[test]
	fn test_from_graph_event() {
		assert_eq!(
			MapEvent::from(GraphEvent::NodeClick("x".into())),
			MapEvent::ClickNode("x".into())
		);
		assert_eq!(
			MapEvent::from(GraphEvent::BackgroundClick),
			MapEvent::ClickBackground
		);
	}
}

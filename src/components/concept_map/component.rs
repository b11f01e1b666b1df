use leptos::prelude::*;
use log::debug;

use super::detail::DetailPanel;
use super::filter::CategoryFilter;
use super::graph::{ConceptGraph, NodeCategory};
use super::selection::{MapEvent, MapInteraction};
use crate::components::force_graph::{ForceGraphCanvas, GraphData, GraphEvent};

/// Interactive network of theorists, concepts and games with a category
/// filter and a detail panel for the clicked node.
#[component]
pub fn ConceptMap() -> impl IntoView {
	let graph = StoredValue::new(ConceptGraph::build());
	let (filter, set_filter) = signal(CategoryFilter::All);
	let interaction = RwSignal::new(MapInteraction::default());

	let data = Signal::derive(move || -> GraphData {
		let filter = filter.get();
		graph.with_value(|g| g.view_data(filter))
	});
	// Each memo notifies only when its own field changes.
	let selected = Memo::new(move |_| interaction.with(|i| i.selected.clone()));
	let panel_open = Memo::new(move |_| interaction.with(MapInteraction::panel_open));
	let hovered_label = Memo::new(move |_| {
		let id = interaction.with(|i| i.hovered.clone())?;
		graph.with_value(|g| g.node(&id).map(|n| n.label))
	});

	let on_event = Callback::new(move |event: GraphEvent| {
		interaction.update(|i| i.apply(event.into()));
	});
	let on_close = Callback::new(move |_: ()| {
		interaction.update(|i| i.apply(MapEvent::ClosePanel));
	});

	let choose = move |next: CategoryFilter| {
		if filter.get_untracked() == next {
			return;
		}
		debug!("concept map filter: {}", next.as_str());
		set_filter.set(next);
		interaction.update(|i| i.apply(MapEvent::FilterChanged));
	};

	let detail = move || {
		let id = selected.get()?;
		let node = graph.with_value(|g| g.node(&id).cloned())?;
		Some(view! { <DetailPanel node=node on_close=on_close /> })
	};

	view! {
		<div class="concept-map">
			<div class="filter-bar" role="group" aria-label="Filter nodes">
				{CategoryFilter::ALL
					.into_iter()
					.map(|f| {
						let active = move || filter.get() == f;
						view! {
							<button
								class="filter-button"
								class:active=active
								style=format!("--accent: {}", f.color())
								aria-pressed=move || active().to_string()
								on:click=move |_| choose(f)
							>
								<span class="filter-icon">{f.icon()}</span>
								{f.label()}
							</button>
						}
					})
					.collect_view()}
			</div>

			<div class="map-surface" class:panel-open=move || panel_open.get()>
				<ForceGraphCanvas data=data on_event=on_event selected=selected />
				<div class="hover-readout" aria-live="polite">
					{move || hovered_label.get()}
				</div>
				{detail}
			</div>

			<div class="map-legend">
				{[NodeCategory::Theorist, NodeCategory::Concept, NodeCategory::Game]
					.into_iter()
					.map(|c| {
						view! {
							<span class="legend-item">
								<span class="legend-glyph">{c.glyph()}</span>
								{c.name()}
							</span>
						}
					})
					.collect_view()}
				<span class="legend-hint">
					"Click nodes for details \u{2022} Drag to move \u{2022} Scroll to zoom"
				</span>
			</div>
		</div>
	}
}

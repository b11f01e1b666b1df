//! The course concept network: graph construction, filtering, interaction
//! state and the map component built on the force graph canvas.

mod component;
mod detail;
mod filter;
mod graph;
mod selection;

pub use component::ConceptMap;
pub use filter::CategoryFilter;
pub use graph::{ConceptEdge, ConceptGraph, ConceptNode, EdgeKind, Entity, NodeCategory};
pub use selection::{MapEvent, MapInteraction};

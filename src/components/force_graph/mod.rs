//! Canvas-rendered force-directed graph.

mod component;
mod render;
mod state;
mod types;

pub use component::ForceGraphCanvas;
pub use types::{GraphData, GraphEvent, GraphLink, GraphNode, LayoutForces};

//! Reusable view components.

pub mod concept_map;
pub mod force_graph;
pub mod layout;
pub mod quote_box;

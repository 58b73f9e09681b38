//! UI components.

pub mod circle_graph;
pub mod settings;

//! The graph canvas: matrix type, circular layout, and 2d rendering.

mod component;
pub mod layout;
mod render;
mod types;

pub use component::CircleGraphCanvas;
pub use types::AdjacencyMatrix;

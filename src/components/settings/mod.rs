//! The node-input panel and its field parser.

mod component;
pub mod parse;

pub use component::GraphSettingsPanel;

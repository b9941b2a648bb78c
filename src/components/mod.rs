//! UI components.

pub mod node_editor;

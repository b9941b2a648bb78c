//! Interactive node-link editor drawn on a canvas.

mod component;
pub mod config;
pub mod drag;
pub mod edge_sync;
pub mod graph;
pub mod layout;
pub mod panel;
pub mod render;
pub mod selection;
mod state;
mod tools;
mod types;

pub use component::NodeEditorCanvas;
pub use config::EditorConfig;
pub use edge_sync::{EdgeDiff, reconcile_edges};
pub use graph::GraphStore;
pub use layout::LayoutContext;
pub use panel::{PanelMode, PanelState};
pub use render::{Surface, render};
pub use selection::{Selection, SelectionController};
pub use state::EditorState;
pub use tools::ToolPanel;
pub use types::{ChecklistEntry, Node, NodeId};

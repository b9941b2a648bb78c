//! Click selection. Exactly one node or none is selected.

use log::debug;

use super::graph::GraphStore;
use super::layout::LayoutContext;
use super::panel::{PanelMode, PanelState};
use super::types::NodeId;

/// Which node, if any, is selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	/// No node is selected.
	#[default]
	Unselected,
	/// This node is selected.
	Selected(NodeId),
}

/// Owns the selection state.
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
	state: Selection,
}

impl SelectionController {
	/// Starts unselected.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current state.
	pub fn state(&self) -> Selection {
		self.state
	}

	/// Selected node, if any.
	pub fn selected(&self) -> Option<NodeId> {
		match self.state {
			Selection::Selected(id) => Some(id),
			Selection::Unselected => None,
		}
	}

	/// Whether `id` is the selected node.
	pub fn is_selected(&self, id: NodeId) -> bool {
		self.state == Selection::Selected(id)
	}

	/// Panel mode matching the selection.
	pub fn mode(&self) -> PanelMode {
		match self.state {
			Selection::Selected(_) => PanelMode::Edit,
			Selection::Unselected => PanelMode::Configure,
		}
	}

	/// Select the topmost node under the pointer, or deselect on a miss.
	///
	/// A hit re-anchors the layout on the node and loads it into the panel.
	/// A miss resets the panel and leaves the anchor where it was.
	pub fn on_click(
		&mut self,
		graph: &GraphStore,
		layout: &mut LayoutContext,
		panel: &mut PanelState,
		px: f64,
		py: f64,
	) -> Selection {
		match graph.node_at(px, py).and_then(|id| graph.get(id)) {
			Some(node) => {
				self.state = Selection::Selected(node.id());
				layout.reset_to(node.x, node.y);
				panel.load(node, graph);
				debug!("selected node {}", node.id());
			}
			None => {
				if let Selection::Selected(id) = self.state {
					debug!("deselected node {}", id);
				}
				self.clear();
				panel.reset();
			}
		}
		self.state
	}

	/// Back to unselected.
	pub fn clear(&mut self) {
		self.state = Selection::Unselected;
	}
}

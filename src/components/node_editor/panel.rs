//! In-memory model of the side panel form.

use std::collections::BTreeSet;

use super::graph::GraphStore;
use super::types::{Node, NodeId};

/// Whether the form adds a new node or edits the selected one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelMode {
	/// Nothing selected; submit adds a node.
	#[default]
	Configure,
	/// A node is selected; submit edits it.
	Edit,
}

impl PanelMode {
	/// Panel heading.
	pub fn title(self) -> &'static str {
		match self {
			Self::Configure => "Configure Node",
			Self::Edit => "Edit Node",
		}
	}

	/// Submit button text.
	pub fn submit_label(self) -> &'static str {
		match self {
			Self::Configure => "Add Node",
			Self::Edit => "Edit Node",
		}
	}

	/// The delete control only exists while a node is selected.
	pub fn shows_delete(self) -> bool {
		self == Self::Edit
	}
}

/// Name and color fields plus the checked rows of the checklist.
#[derive(Clone, Debug, PartialEq)]
pub struct PanelState {
	/// Name field.
	pub name: String,
	/// Color field.
	pub color: String,
	checked: BTreeSet<NodeId>,
	default_color: String,
}

impl PanelState {
	/// Empty form whose color resets to `default_color`.
	pub fn new(default_color: impl Into<String>) -> Self {
		let default_color = default_color.into();
		Self {
			name: String::new(),
			color: default_color.clone(),
			checked: BTreeSet::new(),
			default_color,
		}
	}

	/// Back to an empty form with nothing checked.
	pub fn reset(&mut self) {
		self.name.clear();
		self.color.clone_from(&self.default_color);
		self.checked.clear();
	}

	/// Show `node` and check exactly its neighbors.
	pub fn load(&mut self, node: &Node, graph: &GraphStore) {
		self.name.clone_from(&node.name);
		self.color.clone_from(&node.color);
		self.checked = graph.neighbors(node.id()).collect();
	}

	/// Tick or untick the row of `id`.
	pub fn set_checked(&mut self, id: NodeId, checked: bool) {
		if checked {
			self.checked.insert(id);
		} else {
			self.checked.remove(&id);
		}
	}

	/// Whether the row of `id` is ticked.
	pub fn is_checked(&self, id: NodeId) -> bool {
		self.checked.contains(&id)
	}

	/// Ids currently checked, the desired neighbor set for edge sync.
	pub fn checked(&self) -> &BTreeSet<NodeId> {
		&self.checked
	}
}

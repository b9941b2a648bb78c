use log::debug;

use super::config::EditorConfig;
use super::drag::DragController;
use super::edge_sync;
use super::graph::GraphStore;
use super::layout::LayoutContext;
use super::panel::{PanelMode, PanelState};
use super::selection::{Selection, SelectionController};
use super::types::{ChecklistEntry, Node, NodeId};

/// Everything the editor mutates from input events and reads when drawing.
#[derive(Clone, Debug)]
pub struct EditorState {
	/// Nodes and edges.
	pub graph: GraphStore,
	/// Anchor for the next new node.
	pub layout: LayoutContext,
	/// Selected node.
	pub selection: SelectionController,
	/// Node under drag.
	pub drag: DragController,
	/// Side panel form.
	pub panel: PanelState,
	/// Sizes and styles.
	pub config: EditorConfig,
	/// Surface width.
	pub width: f64,
	/// Surface height.
	pub height: f64,
}

impl EditorState {
	/// Empty editor for a surface of the given size.
	pub fn new(config: EditorConfig, width: f64, height: f64) -> Self {
		Self {
			graph: GraphStore::new(),
			layout: LayoutContext::for_surface(width, height, config.anchor_fraction),
			selection: SelectionController::new(),
			drag: DragController::new(),
			panel: PanelState::new(config.default_color.clone()),
			config,
			width,
			height,
		}
	}

	/// Form submission: adds a node when nothing is selected, otherwise
	/// edits the selected node. Returns the affected node.
	pub fn submit(&mut self, name: &str, color: &str) -> Option<NodeId> {
		match self.selection.state() {
			Selection::Unselected => Some(self.add_node(name, color)),
			Selection::Selected(_) => self.edit_selected(name, color),
		}
	}

	/// Submit whatever the panel currently holds.
	pub fn submit_panel(&mut self) -> Option<NodeId> {
		let (name, color) = (self.panel.name.clone(), self.panel.color.clone());
		self.submit(&name, &color)
	}

	/// Create a node, wire it to every checked row and reset the form.
	pub fn add_node(&mut self, name: &str, color: &str) -> NodeId {
		let id = self
			.graph
			.create_node(name, color, self.config.node_size, &mut self.layout);
		edge_sync::sync_edges(&mut self.graph, id, self.panel.checked(), true);
		self.panel.reset();
		id
	}

	/// Rename and recolor the selected node, then make its edges match the
	/// checklist.
	pub fn edit_selected(&mut self, name: &str, color: &str) -> Option<NodeId> {
		let id = self.selection.selected()?;
		let node = self.graph.get_mut(id)?;
		node.name = name.to_owned();
		node.color = color.to_owned();
		debug!("edited node {} -> {:?} {}", id, name, color);

		let diff = edge_sync::sync_edges(&mut self.graph, id, self.panel.checked(), false);
		if let Some(diff) = diff.filter(|d| !d.is_empty()) {
			debug!("node {} edges: +{:?} -{:?}", id, diff.added, diff.removed);
		}
		Some(id)
	}

	/// Delete the selected node, its edges and its checklist row.
	pub fn delete_selected(&mut self) -> Option<Node> {
		let id = self.selection.selected()?;
		let node = self.graph.remove_node(id);
		self.selection.clear();
		self.panel.reset();
		if self.drag.is_dragging(id) {
			self.drag.on_pointer_up();
		}
		node
	}

	/// Surface click; see [`SelectionController::on_click`].
	pub fn click(&mut self, px: f64, py: f64) -> Selection {
		self.selection
			.on_click(&self.graph, &mut self.layout, &mut self.panel, px, py)
	}

	/// Start dragging the node under the pointer.
	pub fn pointer_down(&mut self, px: f64, py: f64) -> Option<NodeId> {
		self.drag.on_pointer_down(&self.graph, px, py)
	}

	/// Move the dragged node.
	pub fn pointer_move(&mut self, px: f64, py: f64) {
		self.drag.on_pointer_move(&mut self.graph, px, py);
	}

	/// End any drag.
	pub fn pointer_up(&mut self) {
		self.drag.on_pointer_up();
	}

	/// Track the new surface size. Nodes and the anchor stay put.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Whether `id` is selected.
	pub fn is_selected(&self, id: NodeId) -> bool {
		self.selection.is_selected(id)
	}

	/// Add or edit mode of the panel.
	pub fn panel_mode(&self) -> PanelMode {
		self.selection.mode()
	}

	/// One row per live node, in store order.
	pub fn checklist(&self) -> Vec<ChecklistEntry> {
		self.graph
			.iter()
			.map(|n| ChecklistEntry {
				id: n.id(),
				label: n.name.clone(),
			})
			.collect()
	}
}

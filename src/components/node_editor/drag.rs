//! Pointer dragging, independent of selection.

use super::graph::GraphStore;
use super::types::NodeId;

/// The node being dragged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
	/// Dragged node.
	pub node: NodeId,
	/// Pointer position minus node position at pointer-down.
	pub offset_x: f64,
	/// See `offset_x`.
	pub offset_y: f64,
}

/// Tracks at most one drag at a time.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	active: Option<DragState>,
}

impl DragController {
	/// Nothing grabbed.
	pub fn new() -> Self {
		Self::default()
	}

	/// The current drag, if any.
	pub fn active(&self) -> Option<DragState> {
		self.active
	}

	/// Whether `id` is being dragged.
	pub fn is_dragging(&self, id: NodeId) -> bool {
		self.active.is_some_and(|d| d.node == id)
	}

	/// Grab the topmost node under the pointer, if any.
	pub fn on_pointer_down(&mut self, graph: &GraphStore, px: f64, py: f64) -> Option<NodeId> {
		let node = graph.node_at(px, py).and_then(|id| graph.get(id))?;
		self.active = Some(DragState {
			node: node.id(),
			offset_x: px - node.x,
			offset_y: py - node.y,
		});
		Some(node.id())
	}

	/// Move the grabbed node so it keeps its offset to the pointer. Unclamped.
	pub fn on_pointer_move(&mut self, graph: &mut GraphStore, px: f64, py: f64) {
		let Some(drag) = self.active else {
			return;
		};
		match graph.get_mut(drag.node) {
			Some(node) => {
				node.x = px - drag.offset_x;
				node.y = py - drag.offset_y;
			}
			None => self.active = None,
		}
	}

	/// Release whatever is grabbed.
	pub fn on_pointer_up(&mut self) {
		self.active = None;
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::node_editor::layout::LayoutContext;

	fn one_node() -> (GraphStore, NodeId) {
		let mut graph = GraphStore::new();
		let mut layout = LayoutContext::new(0.0, 0.0);
		let id = graph.create_node("a", "#fff", 10.0, &mut layout);
		(graph, id)
	}

	#[test]
	fn drag_keeps_pointer_offset() {
		let (mut graph, id) = one_node();
		let mut drag = DragController::new();
		assert_eq!(drag.on_pointer_down(&graph, 43.0, 78.0), Some(id));
		assert_eq!(
			drag.active(),
			Some(DragState {
				node: id,
				offset_x: 3.0,
				offset_y: -2.0
			})
		);

		drag.on_pointer_move(&mut graph, 503.0, -98.0);
		assert_eq!(graph.get(id).map(|n| n.position()), Some((500.0, -96.0)));

		drag.on_pointer_up();
		drag.on_pointer_move(&mut graph, 0.0, 0.0);
		assert_eq!(graph.get(id).map(|n| n.position()), Some((500.0, -96.0)));
		assert!(!drag.is_dragging(id));
	}

	#[test]
	fn pointer_down_on_empty_space_grabs_nothing() {
		let (mut graph, id) = one_node();
		let mut drag = DragController::new();
		assert_eq!(drag.on_pointer_down(&graph, 300.0, 300.0), None);
		drag.on_pointer_move(&mut graph, 1.0, 1.0);
		assert_eq!(graph.get(id).map(|n| n.position()), Some((40.0, 80.0)));
	}

	#[test]
	fn drag_of_removed_node_ends() {
		let (mut graph, id) = one_node();
		let mut drag = DragController::new();
		drag.on_pointer_down(&graph, 40.0, 80.0);
		graph.remove_node(id);
		drag.on_pointer_move(&mut graph, 1.0, 1.0);
		assert_eq!(drag.active(), None);
	}
}

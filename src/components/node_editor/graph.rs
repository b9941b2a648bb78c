//! Node storage and the undirected edge set.
//!
//! Nodes keep creation order, which is both draw order and hit-test
//! precedence (later nodes sit on top). Edges live in a `UnGraphMap`, so an
//! edge between two nodes is a single entry and symmetry holds without
//! maintaining two adjacency lists. `connect`, `disconnect` and
//! `remove_node` are the only paths that touch it.

use log::debug;
use petgraph::graphmap::UnGraphMap;

use super::layout::LayoutContext;
use super::types::{Node, NodeId};

/// Every live node and the edges between them.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: UnGraphMap<NodeId, ()>,
	next_id: u32,
}

impl GraphStore {
	/// Empty store; the first id is 0.
	pub fn new() -> Self {
		Self::default()
	}

	/// Allocate the next id, place the node and append it.
	pub fn create_node(
		&mut self,
		name: impl Into<String>,
		color: impl Into<String>,
		size: f64,
		layout: &mut LayoutContext,
	) -> NodeId {
		let id = NodeId(self.next_id);
		self.next_id += 1;

		let position = layout.place(self.nodes.len(), size);
		let node = Node::new(id, name.into(), color.into(), size, position);
		debug!("created node {} {:?} at {:?}", id, node.name, position);

		self.edges.add_node(id);
		self.nodes.push(node);
		id
	}

	/// Remove a node along with every edge touching it.
	pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
		let pos = self.nodes.iter().position(|n| n.id() == id)?;
		self.edges.remove_node(id);
		let node = self.nodes.remove(pos);
		debug!("removed node {} {:?}", id, node.name);
		Some(node)
	}

	/// Add the edge `a - b`. Returns `false` for self-loops, unknown ids or an
	/// edge that already exists.
	pub fn connect(&mut self, a: NodeId, b: NodeId) -> bool {
		if a == b || !self.contains(a) || !self.contains(b) || self.edges.contains_edge(a, b) {
			return false;
		}
		self.edges.add_edge(a, b, ());
		debug!("connected {} - {}", a, b);
		true
	}

	/// Remove the edge `a - b` if present.
	pub fn disconnect(&mut self, a: NodeId, b: NodeId) -> bool {
		let removed = self.edges.remove_edge(a, b).is_some();
		if removed {
			debug!("disconnected {} - {}", a, b);
		}
		removed
	}

	/// Whether the edge `a - b` exists.
	pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
		self.edges.contains_edge(a, b)
	}

	/// Neighbors of `id`; empty for unknown ids.
	pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
		self.edges.neighbors(id)
	}

	/// Every edge once, as `(smaller id, larger id)`.
	pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
		self.edges
			.all_edges()
			.map(|(a, b, _)| if a <= b { (a, b) } else { (b, a) })
	}

	/// Number of undirected edges.
	pub fn edge_count(&self) -> usize {
		self.edges.edge_count()
	}

	/// Whether `id` is a live node.
	pub fn contains(&self, id: NodeId) -> bool {
		self.get(id).is_some()
	}

	/// Node by id.
	pub fn get(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id() == id)
	}

	/// Mutable node by id.
	pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
		self.nodes.iter_mut().find(|n| n.id() == id)
	}

	/// Nodes in creation order.
	pub fn iter(&self) -> std::slice::Iter<'_, Node> {
		self.nodes.iter()
	}

	/// Number of live nodes.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// True when no node exists.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Topmost node containing the point, i.e. the latest created one.
	pub fn node_at(&self, px: f64, py: f64) -> Option<NodeId> {
		self.nodes
			.iter()
			.rev()
			.find(|n| n.contains(px, py))
			.map(Node::id)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeSet;

	use pretty_assertions::assert_eq;

	use super::*;

	fn store_with(n: usize) -> (GraphStore, Vec<NodeId>) {
		let mut store = GraphStore::new();
		let mut layout = LayoutContext::new(0.0, 0.0);
		let ids = (0..n)
			.map(|i| store.create_node(format!("n{i}"), "#fff", 10.0, &mut layout))
			.collect();
		(store, ids)
	}

	fn neighbor_set(store: &GraphStore, id: NodeId) -> BTreeSet<NodeId> {
		store.neighbors(id).collect()
	}

	#[test]
	fn ids_strictly_increase_and_survive_deletion() {
		let (mut store, ids) = store_with(3);
		assert_eq!(ids, vec![NodeId(0), NodeId(1), NodeId(2)]);

		store.remove_node(ids[2]);
		let mut layout = LayoutContext::new(0.0, 0.0);
		let next = store.create_node("again", "#fff", 10.0, &mut layout);
		assert_eq!(next, NodeId(3));
	}

	#[test]
	fn connect_is_symmetric_and_idempotent() {
		let (mut store, ids) = store_with(2);
		assert!(store.connect(ids[0], ids[1]));
		assert!(!store.connect(ids[1], ids[0]));
		assert!(store.are_neighbors(ids[1], ids[0]));
		assert_eq!(store.edge_count(), 1);
		assert_eq!(neighbor_set(&store, ids[0]), BTreeSet::from([ids[1]]));
		assert_eq!(neighbor_set(&store, ids[1]), BTreeSet::from([ids[0]]));
	}

	#[test]
	fn connect_rejects_self_loops_and_unknown_ids() {
		let (mut store, ids) = store_with(1);
		assert!(!store.connect(ids[0], ids[0]));
		assert!(!store.connect(ids[0], NodeId(42)));
		assert_eq!(store.edge_count(), 0);
	}

	#[test]
	fn disconnect_removes_both_directions() {
		let (mut store, ids) = store_with(2);
		store.connect(ids[0], ids[1]);
		assert!(store.disconnect(ids[1], ids[0]));
		assert!(!store.are_neighbors(ids[0], ids[1]));
		assert!(!store.disconnect(ids[0], ids[1]));
	}

	#[test]
	fn remove_node_severs_edges() {
		let (mut store, ids) = store_with(3);
		store.connect(ids[0], ids[1]);
		store.connect(ids[0], ids[2]);
		store.connect(ids[1], ids[2]);

		let removed = store.remove_node(ids[0]).map(|n| n.id());
		assert_eq!(removed, Some(ids[0]));
		assert_eq!(store.len(), 2);
		assert_eq!(neighbor_set(&store, ids[1]), BTreeSet::from([ids[2]]));
		assert_eq!(neighbor_set(&store, ids[2]), BTreeSet::from([ids[1]]));
		assert!(store.remove_node(ids[0]).is_none());
	}

	#[test]
	fn edges_are_canonical() {
		let (mut store, ids) = store_with(3);
		store.connect(ids[2], ids[0]);
		store.connect(ids[1], ids[2]);
		let edges: BTreeSet<_> = store.edges().collect();
		assert_eq!(edges, BTreeSet::from([(ids[0], ids[2]), (ids[1], ids[2])]));
	}

	#[test]
	fn node_at_prefers_latest_created() {
		let mut store = GraphStore::new();
		let mut layout = LayoutContext::new(0.0, 0.0);
		let a = store.create_node("a", "#fff", 10.0, &mut layout);
		layout.reset_to(0.0, 160.0);
		let b = store.create_node("b", "#fff", 10.0, &mut layout);
		// Both sit at (40, 80).
		assert_eq!(store.get(a).map(Node::position), Some((40.0, 80.0)));
		assert_eq!(store.get(b).map(Node::position), Some((40.0, 80.0)));
		assert_eq!(store.node_at(41.0, 81.0), Some(b));
	}

	#[test]
	fn node_at_empty_store_is_none() {
		let store = GraphStore::new();
		assert_eq!(store.node_at(0.0, 0.0), None);
	}
}

//! Reconciles the checklist with the edges of one node.
//!
//! `reconcile_edges` is a pure diff; `apply` performs it through the graph
//! store so both directions change together. For a node that was just
//! created the removal pass is skipped, so whatever is still checked in the
//! panel at that moment is wired onto the new node.

use std::collections::BTreeSet;

use super::graph::GraphStore;
use super::types::NodeId;

/// Edges to add and remove around one target node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeDiff {
	/// Node the diff is about.
	pub target: NodeId,
	/// Nodes to connect to `target`.
	pub added: Vec<NodeId>,
	/// Nodes to disconnect from `target`.
	pub removed: Vec<NodeId>,
}

impl EdgeDiff {
	/// True when no edge changes.
	pub fn is_empty(&self) -> bool {
		self.added.is_empty() && self.removed.is_empty()
	}
}

/// Work out which edges around `target` must change so its neighbors match
/// `desired`. Ids not in the store, and `target` itself, are ignored.
/// `None` when `target` is not in the store.
pub fn reconcile_edges(
	graph: &GraphStore,
	target: NodeId,
	desired: &BTreeSet<NodeId>,
	is_new: bool,
) -> Option<EdgeDiff> {
	if !graph.contains(target) {
		return None;
	}

	let current: BTreeSet<NodeId> = graph.neighbors(target).collect();
	let removed = if is_new {
		Vec::new()
	} else {
		current.difference(desired).copied().collect()
	};
	let added = desired
		.iter()
		.copied()
		.filter(|&id| id != target && !current.contains(&id) && graph.contains(id))
		.collect();

	Some(EdgeDiff {
		target,
		added,
		removed,
	})
}

/// Apply a diff produced by [`reconcile_edges`].
pub fn apply(graph: &mut GraphStore, diff: &EdgeDiff) {
	for &id in &diff.removed {
		graph.disconnect(diff.target, id);
	}
	for &id in &diff.added {
		graph.connect(diff.target, id);
	}
}

/// Reconcile and apply in one step.
pub fn sync_edges(
	graph: &mut GraphStore,
	target: NodeId,
	desired: &BTreeSet<NodeId>,
	is_new: bool,
) -> Option<EdgeDiff> {
	let diff = reconcile_edges(graph, target, desired, is_new)?;
	apply(graph, &diff);
	Some(diff)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::components::node_editor::layout::LayoutContext;

	fn store(n: usize) -> (GraphStore, Vec<NodeId>) {
		let mut graph = GraphStore::new();
		let mut layout = LayoutContext::new(0.0, 0.0);
		let ids = (0..n)
			.map(|i| graph.create_node(format!("n{i}"), "#fff", 10.0, &mut layout))
			.collect();
		(graph, ids)
	}

	fn synced(
		graph: &mut GraphStore,
		target: NodeId,
		desired: &BTreeSet<NodeId>,
		is_new: bool,
	) -> EdgeDiff {
		sync_edges(graph, target, desired, is_new).expect("target is in the store")
	}

	fn assert_symmetric(graph: &GraphStore) {
		for a in graph.iter() {
			for b in graph.iter() {
				assert_eq!(
					graph.neighbors(a.id()).any(|n| n == b.id()),
					graph.neighbors(b.id()).any(|n| n == a.id()),
				);
			}
		}
	}

	#[test]
	fn adds_checked_edges() {
		let (mut graph, ids) = store(3);
		let desired = BTreeSet::from([ids[1], ids[2]]);
		let diff = synced(&mut graph, ids[0], &desired, false);
		assert_eq!(diff.added, vec![ids[1], ids[2]]);
		assert!(graph.are_neighbors(ids[1], ids[0]));
		assert!(graph.are_neighbors(ids[2], ids[0]));
		assert_symmetric(&graph);
	}

	#[test]
	fn removes_unchecked_edges_when_editing() {
		let (mut graph, ids) = store(3);
		graph.connect(ids[0], ids[1]);
		graph.connect(ids[0], ids[2]);
		let diff = synced(&mut graph, ids[0], &BTreeSet::from([ids[1]]), false);
		assert_eq!(diff.removed, vec![ids[2]]);
		assert!(diff.added.is_empty());
		assert!(graph.are_neighbors(ids[0], ids[1]));
		assert!(!graph.are_neighbors(ids[2], ids[0]));
		assert_symmetric(&graph);
	}

	#[test]
	fn new_node_skips_removal_pass() {
		let (mut graph, ids) = store(3);
		graph.connect(ids[2], ids[0]);
		let diff = reconcile_edges(&graph, ids[2], &BTreeSet::from([ids[1]]), true)
			.expect("target is in the store");
		assert!(diff.removed.is_empty());
		assert_eq!(diff.added, vec![ids[1]]);
	}

	#[test]
	fn already_present_edges_are_not_duplicated() {
		let (mut graph, ids) = store(2);
		graph.connect(ids[0], ids[1]);
		let diff = synced(&mut graph, ids[0], &BTreeSet::from([ids[1]]), false);
		assert!(diff.is_empty());
		assert_eq!(graph.edge_count(), 1);
	}

	#[test]
	fn unknown_and_self_ids_are_ignored() {
		let (mut graph, ids) = store(2);
		let desired = BTreeSet::from([ids[0], NodeId(99)]);
		let diff = synced(&mut graph, ids[0], &desired, false);
		assert!(diff.is_empty());
		assert_eq!(graph.edge_count(), 0);
	}

	#[test]
	fn unknown_target_is_a_no_op() {
		let (mut graph, ids) = store(2);
		let diff = sync_edges(&mut graph, NodeId(7), &BTreeSet::from([ids[1]]), false);
		assert_eq!(diff, None);
		assert_eq!(graph.edge_count(), 0);
	}
}

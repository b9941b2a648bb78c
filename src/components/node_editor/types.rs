use std::fmt;

/// Identity of a node. Allocated once by the graph store and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
	/// Rebuild an id from its raw value, e.g. a checklist key.
	pub fn from_raw(raw: u32) -> Self {
		Self(raw)
	}

	/// Raw numeric id, as used for panel checklist keys.
	pub fn get(self) -> u32 {
		self.0
	}
}

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A graph vertex. Adjacency is owned by the graph store, not the node.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	id: NodeId,
	/// Display label.
	pub name: String,
	/// Fill color, any CSS color string.
	pub color: String,
	size: f64,
	/// Center x in surface units.
	pub x: f64,
	/// Center y in surface units.
	pub y: f64,
}

impl Node {
	pub(crate) fn new(id: NodeId, name: String, color: String, size: f64, (x, y): (f64, f64)) -> Self {
		Self {
			id,
			name,
			color,
			size,
			x,
			y,
		}
	}

	/// The node's id.
	pub fn id(&self) -> NodeId {
		self.id
	}

	/// Radius, fixed at creation.
	pub fn size(&self) -> f64 {
		self.size
	}

	/// Current center.
	pub fn position(&self) -> (f64, f64) {
		(self.x, self.y)
	}

	/// Square bounding-box test with half-width `size`, strict on every side.
	///
	/// Nodes are drawn as circles but hit as squares, so points just outside
	/// the circle near its corners still count as inside.
	pub fn contains(&self, px: f64, py: f64) -> bool {
		(px - self.x).abs() < self.size && (py - self.y).abs() < self.size
	}
}

/// One checklist row of the side panel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChecklistEntry {
	/// Node this row stands for.
	pub id: NodeId,
	/// Current node name.
	pub label: String,
}

//! Zig-zag placement of newly created nodes.
//!
//! A single anchor is shared across creations. Every placement steps right
//! by `4 * size` and up or down by `8 * size` depending on how many nodes
//! exist, then moves the anchor onto the placed node. Selecting a node moves
//! the anchor onto it so the next nodes branch from there. No clamping, no
//! collision avoidance.

/// Holds the layout anchor.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutContext {
	anchor: (f64, f64),
}

impl LayoutContext {
	/// Anchor at an explicit point.
	pub fn new(x: f64, y: f64) -> Self {
		Self { anchor: (x, y) }
	}

	/// Anchor at `fraction` of the surface on both axes.
	pub fn for_surface(width: f64, height: f64, fraction: f64) -> Self {
		Self::new(width * fraction, height * fraction)
	}

	/// Current anchor.
	pub fn anchor(&self) -> (f64, f64) {
		self.anchor
	}

	/// Position for a node of radius `size` when `node_count` nodes already
	/// exist. Advances the anchor to the returned point.
	pub fn place(&mut self, node_count: usize, size: f64) -> (f64, f64) {
		let (ax, ay) = self.anchor;
		let x = ax + size * 4.0;
		let y = if node_count % 2 == 1 {
			ay - size * 8.0
		} else {
			ay + size * 8.0
		};
		self.anchor = (x, y);
		(x, y)
	}

	/// Re-anchor on a node that was just selected.
	pub fn reset_to(&mut self, x: f64, y: f64) {
		self.anchor = (x, y);
	}
}

//! Editor constants and styling.

/// Radius given to every new node.
pub const NODE_SIZE: f64 = 10.0;
/// Fraction of the surface size used for the initial layout anchor.
pub const ANCHOR_FRACTION: f64 = 1.0 / 3.0;
/// Value a freshly reset color input holds.
pub const DEFAULT_COLOR: &str = "#000000";

/// Sizes and styles of the editor. Colors are CSS color strings.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	/// Radius of new nodes.
	pub node_size: f64,
	/// Initial anchor as a fraction of the surface size.
	pub anchor_fraction: f64,
	/// Color input value after a form reset.
	pub default_color: String,
	/// Canvas CSS background; frames only clear.
	pub background: String,
	/// Edge stroke color.
	pub edge_style: String,
	/// Edge stroke width.
	pub edge_width: f64,
	/// Label fill color.
	pub label_style: String,
	/// Label CSS font.
	pub label_font: String,
	/// Selection ring color.
	pub selection_style: String,
	/// Selection ring stroke width.
	pub selection_width: f64,
	/// Gap between node radius and selection ring.
	pub selection_gap: f64,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			node_size: NODE_SIZE,
			anchor_fraction: ANCHOR_FRACTION,
			default_color: DEFAULT_COLOR.into(),
			background: "#1a1a2e".into(),
			edge_style: "#fff".into(),
			edge_width: 1.0,
			label_style: "white".into(),
			label_font: "14px Arial".into(),
			selection_style: "white".into(),
			selection_width: 2.0,
			selection_gap: 2.0,
		}
	}
}

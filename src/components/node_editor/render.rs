//! Frame rendering onto a 2D surface.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::EditorState;

/// The drawing calls the render loop needs from a 2D surface.
pub trait Surface {
	/// Erase a rectangle.
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64);
	/// Straight line between two points.
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), style: &str, width: f64);
	/// Filled disc.
	fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str);
	/// Text centred horizontally on `x`.
	fn fill_text(&self, text: &str, x: f64, y: f64, style: &str, font: &str);
	/// Circle outline.
	fn stroke_circle(&self, x: f64, y: f64, radius: f64, style: &str, width: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear_rect(&self, x: f64, y: f64, width: f64, height: f64) {
		CanvasRenderingContext2d::clear_rect(self, x, y, width, height);
	}

	fn stroke_line(&self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), style: &str, width: f64) {
		self.set_stroke_style_str(style);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.stroke();
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, style: &str) {
		self.set_fill_style_str(style);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.fill();
	}

	fn fill_text(&self, text: &str, x: f64, y: f64, style: &str, font: &str) {
		self.set_fill_style_str(style);
		self.set_font(font);
		self.set_text_align("center");
		let _ = CanvasRenderingContext2d::fill_text(self, text, x, y);
	}

	fn stroke_circle(&self, x: f64, y: f64, radius: f64, style: &str, width: f64) {
		self.set_stroke_style_str(style);
		self.set_line_width(width);
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.stroke();
	}
}

/// Draw one frame: clear, every edge, then every node on top.
pub fn render<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	surface.clear_rect(0.0, 0.0, state.width, state.height);
	draw_edges(state, surface);
	draw_nodes(state, surface);
}

fn draw_edges<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	let config = &state.config;
	for (a, b) in state.graph.edges() {
		let (Some(a), Some(b)) = (state.graph.get(a), state.graph.get(b)) else {
			continue;
		};
		surface.stroke_line(a.position(), b.position(), &config.edge_style, config.edge_width);
	}
}

fn draw_nodes<S: Surface + ?Sized>(state: &EditorState, surface: &S) {
	let config = &state.config;
	for node in state.graph.iter() {
		let (x, y, r) = (node.x, node.y, node.size());
		surface.fill_circle(x, y, r, &node.color);
		surface.fill_text(&node.name, x, y - r * 2.0, &config.label_style, &config.label_font);

		if state.is_selected(node.id()) {
			surface.stroke_circle(
				x,
				y,
				r + config.selection_gap,
				&config.selection_style,
				config.selection_width,
			);
		}
	}
}

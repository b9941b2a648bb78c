use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::config::EditorConfig;
use super::render;
use super::state::EditorState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn window_size(window: &Window) -> Result<(f64, f64), JsValue> {
	let width = window.inner_width()?.as_f64().unwrap_or(800.0);
	let height = window.inner_height()?.as_f64().unwrap_or(600.0);
	Ok((width, height))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
		.dyn_into()
		.map_err(JsValue::from)
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Canvas that draws the graph every frame and routes pointer input into
/// `editor`. The editor is created once the canvas is mounted and sized.
#[component]
pub fn NodeEditorCanvas(
	/// Shared editor state, `None` until the canvas is attached.
	editor: RwSignal<Option<EditorState>>,
	/// Size to the window and follow its resizes.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed width; defaults to the parent's width.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed height; defaults to the parent's height.
	#[prop(default = None)]
	height: Option<f64>,
	/// Sizes and styles.
	#[prop(optional)]
	config: EditorConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let background = config.background.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let Some(window) = web_sys::window() else {
			error!("no window, editor not attached");
			return;
		};

		let (w, h) = if fullscreen {
			match window_size(&window) {
				Ok(size) => size,
				Err(err) => {
					error!("failed to read window size: {:?}", err);
					return;
				}
			}
		} else {
			(
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			)
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("failed to get 2d context: {:?}", err);
				return;
			}
		};
		editor.set(Some(EditorState::new(config.clone(), w, h)));
		info!("node editor attached at {}x{}", w, h);

		if fullscreen {
			let canvas_resize = canvas.clone();
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let Ok((nw, nh)) = window_size(&win) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				editor.update_untracked(|s| {
					if let Some(s) = s {
						s.resize(nw, nh);
					}
				});
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				if let Err(err) = window.add_event_listener_with_callback(
					"resize",
					cb.as_ref().unchecked_ref::<js_sys::Function>(),
				) {
					error!("failed to listen for resize: {:?}", err);
				}
			}
		}

		let animate_inner = animate.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			editor.with_untracked(|s| {
				if let Some(s) = s {
					render::render(s, &ctx);
				}
			});
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		editor.update(|s| {
			if let Some(s) = s {
				s.click(x, y);
			}
		});
	};

	let on_mousedown = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		editor.update_untracked(|s| {
			if let Some(s) = s {
				s.pointer_down(x, y);
			}
		});
	};

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let (x, y) = pointer_position(&canvas, &ev);
		editor.update_untracked(|s| {
			if let Some(s) = s {
				s.pointer_move(x, y);
			}
		});
	};

	let on_mouseup = move |_: MouseEvent| {
		editor.update_untracked(|s| {
			if let Some(s) = s {
				s.pointer_up();
			}
		});
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="node-editor-canvas"
			on:click=on_click
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseup
			style=format!("display: block; background: {background};")
		/>
	}
}

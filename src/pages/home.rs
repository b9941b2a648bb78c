use leptos::prelude::*;

use crate::components::node_editor::{EditorState, NodeEditorCanvas, ToolPanel};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let editor = RwSignal::new(None::<EditorState>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<NodeEditorCanvas editor=editor fullscreen=true />
				<div class="graph-overlay">
					<ToolPanel editor=editor />
				</div>
			</div>
		</ErrorBoundary>
	}
}

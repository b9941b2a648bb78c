use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use super::state::EditorState;
use super::types::ChecklistEntry;

/// Side panel form: name, color, one checkbox per node, submit and delete.
#[component]
pub fn ToolPanel(
	/// Editor shared with the canvas.
	editor: RwSignal<Option<EditorState>>,
) -> impl IntoView {
	let mode = move || {
		editor.with(|s| s.as_ref().map(EditorState::panel_mode).unwrap_or_default())
	};
	let entries = move || {
		editor.with(|s| s.as_ref().map(EditorState::checklist).unwrap_or_default())
	};
	let field = move |pick: fn(&EditorState) -> String| {
		move || editor.with(|s| s.as_ref().map(pick).unwrap_or_default())
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		editor.update(|s| {
			if let Some(s) = s {
				s.submit_panel();
			}
		});
	};

	let on_delete = move |ev: MouseEvent| {
		ev.prevent_default();
		editor.update(|s| {
			if let Some(s) = s {
				s.delete_selected();
			}
		});
	};

	view! {
		<form class="tools" on:submit=on_submit>
			<h2 id="toolHeader">{move || mode().title()}</h2>
			<input
				id="name"
				type="text"
				required
				prop:value=field(|s| s.panel.name.clone())
				on:input=move |ev| {
					let value = event_target_value(&ev);
					editor.update(|s| {
						if let Some(s) = s {
							s.panel.name = value;
						}
					});
				}
			/>
			<input
				id="color"
				type="color"
				prop:value=field(|s| s.panel.color.clone())
				on:input=move |ev| {
					let value = event_target_value(&ev);
					editor.update(|s| {
						if let Some(s) = s {
							s.panel.color = value;
						}
					});
				}
			/>
			<Show when=move || !entries().is_empty()>
				<h3 id="childHeader">"Children"</h3>
			</Show>
			<div id="children">
				<For
					each=entries
					key=|entry: &ChecklistEntry| entry.clone()
					children=move |entry: ChecklistEntry| {
						let id = entry.id;
						let dom_id = format!("checkbox_{}", id);
						view! {
							<div class="child" id=format!("child_{}", id)>
								<input
									type="checkbox"
									class="checkbox"
									id=dom_id.clone()
									prop:checked=move || {
										editor.with(|s| s.as_ref().is_some_and(|s| s.panel.is_checked(id)))
									}
									on:change=move |ev| {
										let checked = event_target_checked(&ev);
										editor.update(|s| {
											if let Some(s) = s {
												s.panel.set_checked(id, checked);
											}
										});
									}
								/>
								<label for=dom_id>{entry.label}</label>
							</div>
						}
					}
				/>
			</div>
			<button id="toolBtn" type="submit">{move || mode().submit_label()}</button>
			<Show when=move || mode().shows_delete()>
				<button id="deleteBtn" type="button" on:click=on_delete>"Delete"</button>
			</Show>
		</form>
	}
}


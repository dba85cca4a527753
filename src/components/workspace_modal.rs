//! Workspace Modal
//!
//! Create or edit a workspace.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{FormErrorLine, ModalShell};
use crate::context::use_app_context;
use crate::forms;
use crate::models::{Workspace, DEFAULT_WORKSPACE_ICON};

#[component]
pub fn WorkspaceModal(existing: Option<Workspace>) -> impl IntoView {
    let ctx = use_app_context();

    let editing_id = existing.as_ref().map(|ws| ws.id);
    let (title, set_title) = signal(existing.as_ref().map(|ws| ws.title.clone()).unwrap_or_default());
    let (icon, set_icon) = signal(existing.map(|ws| ws.icon).unwrap_or_default());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = match forms::workspace_args(&title.get_untracked(), &icon.get_untracked()) {
            Ok(args) => args,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => commands::update_workspace(id, &args).await,
                None => commands::create_workspace(&args).await,
            };
            match result {
                Ok(workspace) => {
                    tracing::info!(workspace_id = workspace.id, "workspace saved");
                    ctx.close();
                    ctx.reload_structure();
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to save workspace");
                    set_error.set(Some(format!("Could not save: {err}")));
                }
            }
        });
    };

    let heading = if editing_id.is_some() { "Edit Workspace" } else { "New Workspace" };

    view! {
        <ModalShell title=heading>
            <form class="modal-form" on:submit=submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Icon (emoji)"
                    <input
                        type="text"
                        maxlength="4"
                        placeholder=DEFAULT_WORKSPACE_ICON
                        prop:value=move || icon.get()
                        on:input=move |ev| set_icon.set(event_target_value(&ev))
                    />
                </label>
                <FormErrorLine error=error />
                <div class="modal-actions">
                    <button type="button" class="btn-cancel" on:click=move |_| ctx.close()>"Cancel"</button>
                    <button type="submit" class="btn-primary">"Save"</button>
                </div>
            </form>
        </ModalShell>
    }
}

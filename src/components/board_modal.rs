//! Board Modal
//!
//! Create a board inside a workspace, or edit one. A new board becomes the current one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, CreateBoardArgs, UpdateBoardArgs};
use crate::components::{FormErrorLine, ModalShell};
use crate::context::use_app_context;
use crate::forms;
use crate::models::Board;
use crate::store::{store_select_board, use_app_store};

enum BoardRequest {
    Create(CreateBoardArgs),
    Update(u32, UpdateBoardArgs),
}

#[component]
pub fn BoardModal(workspace_id: Option<u32>, existing: Option<Board>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing_id = existing.as_ref().map(|board| board.id);
    let (title, set_title) = signal(existing.as_ref().map(|b| b.title.clone()).unwrap_or_default());
    let (description, set_description) =
        signal(existing.and_then(|b| b.description).unwrap_or_default());
    let (error, set_error) = signal(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = title.get_untracked();
        let description = description.get_untracked();

        let request = match (editing_id, workspace_id) {
            (Some(id), _) => forms::update_board_args(&title, &description).map(|args| BoardRequest::Update(id, args)),
            (None, Some(ws_id)) => forms::create_board_args(&title, &description, ws_id).map(BoardRequest::Create),
            (None, None) => {
                tracing::error!("new board without a workspace");
                return;
            }
        };
        let request = match request {
            Ok(request) => request,
            Err(err) => {
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let result = match request {
                BoardRequest::Update(id, args) => commands::update_board(id, &args).await.map(|_| None),
                BoardRequest::Create(args) => commands::create_board(&args).await.map(|board| Some(board.id)),
            };
            match result {
                Ok(created) => {
                    if let Some(board_id) = created {
                        tracing::info!(board_id, "board created");
                        store_select_board(&store, Some(board_id));
                    }
                    ctx.close();
                    ctx.reload_structure();
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to save board");
                    set_error.set(Some(format!("Could not save: {err}")));
                }
            }
        });
    };

    let heading = if editing_id.is_some() { "Edit Board" } else { "New Board" };

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
                    "Description"
                    <input
                        type="text"
                        placeholder="Optional"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
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

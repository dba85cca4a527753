//! Add List Component
//!
//! Inline form at the end of the column strip.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::use_app_context;
use crate::forms;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AddList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(board_id) = store.current_board_id().get_untracked() else {
            return;
        };
        let Some(args) = forms::column_args(&title.get_untracked(), board_id, &store.columns().get_untracked())
        else {
            return;
        };

        spawn_local(async move {
            match commands::create_column(&args).await {
                Ok(column) => {
                    tracing::info!(column_id = column.id, board_id, "list created");
                    set_title.set(String::new());
                    set_open.set(false);
                    ctx.reload_board();
                }
                Err(err) => tracing::error!(error = %err, board_id, "failed to create list"),
            }
        });
    };

    view! {
        <div class="add-list-wrapper">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button class="add-list-btn" on:click=move |_| set_open.set(true)>"+ Add another list"</button>
                }
            >
                <form class="add-list-form" on:submit=submit>
                    <input
                        type="text"
                        placeholder="List title..."
                        autofocus
                        prop:value=move || title.get()
                        on:input=move |ev| set_title.set(event_target_value(&ev))
                    />
                    <div class="add-list-actions">
                        <button type="submit" class="btn-primary">"Add list"</button>
                        <button type="button" class="btn-cancel" on:click=move |_| set_open.set(false)>"×"</button>
                    </div>
                </form>
            </Show>
        </div>
    }
}

//! Kanban Column Component
//!
//! One list of the board: header, cards, and the drop target for dragged cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop, DndSignals};

use crate::commands;
use crate::components::{open_new_task, DeleteConfirmButton, TaskCard};
use crate::context::use_app_context;
use crate::models::{Column, Task};
use crate::store::use_app_store;

#[component]
pub fn KanbanColumn(
    column: Column,
    tasks: Signal<Vec<Task>>,
    dnd: DndSignals,
    on_move: Callback<(u32, u32)>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = column.id;
    let current_title = column.title.clone();

    let on_dragover = make_on_dragover(dnd, id);
    let on_dragleave = make_on_dragleave(dnd, id);
    let on_drop = make_on_drop(dnd, move |task_id, column_id| on_move.run((task_id, column_id)));
    let is_drop_target = move || dnd.over_container_read.get() == Some(id);

    // Double-click the title to rename
    let rename = move |_| {
        let Some(input) = gloo::dialogs::prompt("Rename list", Some(&current_title)) else {
            return;
        };
        let title = input.trim().to_string();
        if title.is_empty() || title == current_title {
            return;
        }
        spawn_local(async move {
            match commands::rename_column(id, &title).await {
                Ok(_) => ctx.reload_board(),
                Err(err) => tracing::error!(error = %err, column_id = id, "failed to rename list"),
            }
        });
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_column(id).await {
                Ok(()) => {
                    tracing::info!(column_id = id, "list deleted");
                    ctx.reload_board();
                }
                Err(err) => tracing::error!(error = %err, column_id = id, "failed to delete list"),
            }
        });
    });

    view! {
        <div class="column">
            <div class="column-header">
                <h2 title="Double-click to rename" on:dblclick=rename>{column.title.clone()}</h2>
                <span class="badge">{move || tasks.with(|t| t.len())}</span>
                <DeleteConfirmButton
                    button_class="column-delete-btn"
                    prompt="Delete this list and all its tasks?"
                    on_confirm=delete
                />
            </div>

            <div
                class=move || if is_drop_target() { "task-list drop-target" } else { "task-list" }
                // Attribute name must equal leptos_dragdrop::DROP_CONTAINER_ATTR
                data-drop-container=id.to_string()
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.title.clone(), task.description.clone(), task.start_date, task.due_date)
                    children=move |task| view! { <TaskCard task=task dnd=dnd /> }
                />
            </div>

            <button class="add-card-btn" on:click=move |_| open_new_task(ctx, store, Some(id))>
                "+ Add card"
            </button>
        </div>
    }
}

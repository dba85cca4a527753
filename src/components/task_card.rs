//! Task Card Component

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DndSignals};

use crate::board::description_preview;
use crate::commands;
use crate::components::{DeleteConfirmButton, EditTarget};
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{store_remove_task, use_app_store};

const CARD_DATE_FORMAT: &str = "%d/%m/%Y";

/// Date line shown under the card title
pub fn date_label(task: &Task) -> String {
    let due = task.due_date.format(CARD_DATE_FORMAT);
    match task.start_date {
        Some(start) => format!("{} → {}", start.format(CARD_DATE_FORMAT), due),
        None => format!("Due {}", due),
    }
}

/// Draggable card. Double-click opens the task editor.
#[component]
pub fn TaskCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = task.id;
    // Checkbox state is local to the card and never persisted
    let (done, set_done) = signal(false);

    let on_dragstart = make_on_dragstart(dnd, id);
    let on_dragend = make_on_dragend(dnd);
    let is_dragging = move || dnd.dragging_id_read.get() == Some(id);

    let card_class = move || {
        let mut class = String::from("card");
        if done.get() {
            class.push_str(" done");
        }
        if is_dragging() {
            class.push_str(" dragging");
        }
        class
    };

    let delete = Callback::new(move |_| {
        spawn_local(async move {
            match commands::delete_task(id).await {
                Ok(()) => {
                    tracing::info!(task_id = id, "task deleted");
                    store_remove_task(&store, id);
                    ctx.reload_board();
                }
                Err(err) => tracing::error!(error = %err, task_id = id, "failed to delete task"),
            }
        });
    });

    let preview = description_preview(task.description.as_deref());
    let dates = date_label(&task);
    let edit_task = task.clone();

    view! {
        <div
            class=card_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dblclick=move |_| ctx.open(EditTarget::Task(edit_task.clone()))
        >
            <div class="card-top">
                <input
                    type="checkbox"
                    class="card-check"
                    prop:checked=move || done.get()
                    on:change=move |_| set_done.update(|d| *d = !*d)
                    on:dblclick=|ev| ev.stop_propagation()
                />
                <h3>{task.title}</h3>
                <DeleteConfirmButton button_class="btn-delete" prompt="Delete this task?" on_confirm=delete />
            </div>
            {preview.map(|text| view! { <p class="card-desc">{text}</p> })}
            <span class="card-dates">{dates}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(start: Option<NaiveDate>) -> Task {
        Task {
            id: 1,
            title: "Ship".into(),
            description: None,
            start_date: start,
            due_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
            column_id: 2,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_date_label_due_only() {
        assert_eq!(date_label(&task(None)), "Due 15/07/2024");
    }

    #[test]
    fn test_date_label_with_start() {
        let start = NaiveDate::from_ymd_opt(2024, 7, 1);
        assert_eq!(date_label(&task(start)), "01/07/2024 → 15/07/2024");
    }
}

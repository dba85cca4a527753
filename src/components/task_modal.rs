//! Task Modal
//!
//! Create or edit a task. The target column is chosen explicitly.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::board::{sort_columns, BoardView};
use crate::commands;
use crate::components::{EditTarget, FormErrorLine, ModalShell};
use crate::context::{use_app_context, AppContext};
use crate::forms::{FormError, TaskForm};
use crate::models::Task;
use crate::store::{use_app_store, AppStateStoreFields, AppStore};

/// Open the new-task modal, preselecting `column_id` or the board's first column.
///
/// Refuses with an alert when no board is selected or the board has no lists.
pub fn open_new_task(ctx: AppContext, store: AppStore, column_id: Option<u32>) {
    if store.current_board_id().get_untracked().is_none() {
        gloo::dialogs::alert("Select or create a board first.");
        return;
    }
    let first_column = BoardView::build(&store.columns().get_untracked(), &[]).first_column_id();
    if first_column.is_none() {
        gloo::dialogs::alert(&FormError::NoColumn.to_string());
        return;
    }
    let column_id = column_id.or(first_column);
    ctx.open(EditTarget::NewTask { column_id });
}

#[component]
pub fn TaskModal(column_id: Option<u32>, existing: Option<Task>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let editing_id = existing.as_ref().map(|task| task.id);
    let form = RwSignal::new(match &existing {
        Some(task) => TaskForm::from_task(task),
        None => TaskForm::blank(column_id),
    });
    let (error, set_error) = signal(None::<String>);

    let columns = move || {
        let mut columns = store.columns().get();
        sort_columns(&mut columns);
        columns
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let args = match form.with_untracked(TaskForm::validate) {
            Ok(args) => args,
            Err(err) => {
                tracing::debug!(error = %err, "task form rejected");
                set_error.set(Some(err.to_string()));
                return;
            }
        };
        set_error.set(None);

        spawn_local(async move {
            let result = match editing_id {
                Some(id) => commands::update_task(id, &args).await,
                None => commands::create_task(&args).await,
            };
            match result {
                Ok(task) => {
                    tracing::info!(task_id = task.id, column_id = task.column_id, "task saved");
                    ctx.close();
                    ctx.reload_board();
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to save task");
                    set_error.set(Some(format!("Could not save: {err}")));
                }
            }
        });
    };

    let heading = if editing_id.is_some() { "Edit Task" } else { "New Task" };

    view! {
        <ModalShell title=heading>
            <form class="modal-form" on:submit=submit>
                <label>
                    "Title"
                    <input
                        type="text"
                        required
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        rows="4"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="form-row">
                    <label>
                        "Start"
                        <input
                            type="date"
                            prop:value=move || form.with(|f| f.start_date.clone())
                            on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Due"
                        <input
                            type="date"
                            required
                            prop:value=move || form.with(|f| f.due_date.clone())
                            on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                        />
                    </label>
                </div>
                <label>
                    "List"
                    <select on:change=move |ev| form.update(|f| f.column_id = event_target_value(&ev).parse().ok())>
                        <For
                            each=columns
                            key=|column| (column.id, column.title.clone())
                            children=move |column| {
                                let column_id = column.id;
                                view! {
                                    <option
                                        value=column_id.to_string()
                                        prop:selected=move || form.with(|f| f.column_id == Some(column_id))
                                    >
                                        {column.title}
                                    </option>
                                }
                            }
                        />
                    </select>
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

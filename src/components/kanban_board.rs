//! Kanban Board Component
//!
//! Board header plus the column strip of the current board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::create_dnd_signals;

use crate::board::BoardView;
use crate::components::{open_new_task, AddList, EditTarget, KanbanColumn};
use crate::context::use_app_context;
use crate::loader;
use crate::models::find_board;
use crate::store::{use_app_store, AppStateStoreFields, BoardStatus};

/// Title, description and global actions of the current board
#[component]
pub fn BoardHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let current = Memo::new(move |_| {
        let board_id = store.current_board_id().get()?;
        find_board(&store.workspaces().get(), board_id).cloned()
    });

    let title = move || match current.get() {
        Some(board) => board.title,
        None => "Select a board".to_string(),
    };
    let subtitle = move || {
        current.get().map(|board| {
            board
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| "Project board".to_string())
        })
    };

    view! {
        <header class="board-header">
            <div class="board-info">
                <h1>{title}</h1>
                <p class="board-description">{subtitle}</p>
            </div>
            <div class="board-actions">
                <button class="btn-primary" on:click=move |_| open_new_task(ctx, store, None)>
                    "+ New Task"
                </button>
                <button class="btn-icon" title="Settings" on:click=move |_| ctx.open(EditTarget::Settings)>
                    "⚙"
                </button>
            </div>
        </header>
    }
}

/// Columns of the current board with drag-and-drop between them
#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_app_store();
    let dnd = create_dnd_signals();

    let board = Memo::new(move |_| BoardView::build(&store.columns().get(), &store.tasks().get()));

    let on_move = Callback::new(move |(task_id, column_id): (u32, u32)| {
        spawn_local(loader::move_task(store, task_id, column_id));
    });

    let status = move || store.board_status().get();
    let has_board = move || store.current_board_id().get().is_some();

    view! {
        <div class="board-container">
            {move || match status() {
                BoardStatus::Loading => Some(view! { <div class="board-status">"Loading board..."</div> }.into_any()),
                BoardStatus::Failed => Some(
                    view! { <div class="board-status error">"Could not load this board."</div> }.into_any(),
                ),
                BoardStatus::Idle | BoardStatus::Ready => None,
            }}

            <Show
                when=has_board
                fallback=|| view! { <div class="board-placeholder">"Pick a board in the sidebar to get started."</div> }
            >
                <Show when=move || status() == BoardStatus::Ready && board.with(|b| b.columns.is_empty())>
                    <div class="board-placeholder">"This board has no lists yet. Create one!"</div>
                </Show>

                <div class="columns">
                    <For
                        each=move || board.with(|b| b.columns.iter().map(|c| c.column.clone()).collect::<Vec<_>>())
                        key=|column| (column.id, column.title.clone())
                        children=move |column| {
                            let column_id = column.id;
                            let tasks = Signal::derive(move || board.with(|b| b.tasks_in(column_id)));
                            view! { <KanbanColumn column=column tasks=tasks dnd=dnd on_move=on_move /> }
                        }
                    />
                    <AddList />
                </div>
            </Show>
        </div>
    }
}

//! DevBoard Frontend App
//!
//! Root component: sidebar + board layout, load effects and the active modal.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{
    BoardHeader, BoardModal, EditTarget, KanbanBoard, SettingsModal, TaskModal, WorkspaceModal, WorkspaceSidebar,
};
use crate::context::AppContext;
use crate::loader;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Workspace tree: on mount and on every structure reload
    Effect::new(move |_| {
        let _ = ctx.structure_trigger.get();
        spawn_local(loader::load_structure(store));
    });

    // Current board: on selection change and on every board reload
    Effect::new(move |previous: Option<Option<u32>>| {
        let _ = ctx.board_trigger.get();
        let current = store.current_board_id().get();
        if previous != Some(current) {
            loader::unload_board(store);
        }
        if let Some(board_id) = current {
            spawn_local(loader::load_board(store, board_id));
        }
        current
    });

    let modal = move || {
        ctx.editing_target.get().map(|target| match target {
            EditTarget::NewWorkspace => view! { <WorkspaceModal existing=None /> }.into_any(),
            EditTarget::Workspace(workspace) => view! { <WorkspaceModal existing=Some(workspace) /> }.into_any(),
            EditTarget::NewBoard { workspace_id } => {
                view! { <BoardModal workspace_id=Some(workspace_id) existing=None /> }.into_any()
            }
            EditTarget::Board(board) => {
                let workspace_id = board.workspace_id;
                view! { <BoardModal workspace_id=workspace_id existing=Some(board) /> }.into_any()
            }
            EditTarget::NewTask { column_id } => view! { <TaskModal column_id=column_id existing=None /> }.into_any(),
            EditTarget::Task(task) => {
                let column_id = Some(task.column_id);
                view! { <TaskModal column_id=column_id existing=Some(task) /> }.into_any()
            }
            EditTarget::Settings => view! { <SettingsModal /> }.into_any(),
        })
    };

    view! {
        <div class="app-layout">
            <WorkspaceSidebar />

            <main class="main-content">
                <BoardHeader />
                <KanbanBoard />
            </main>

            {modal}
        </div>
    }
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Column, Task, Workspace};
use crate::moves::MoveTask;

/// Progress of the current board's fetch pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum BoardStatus {
    /// No board selected
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; the previous render stays on screen
    Failed,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Sidebar tree, replaced wholesale on every structure load
    pub workspaces: Vec<Workspace>,
    /// Board shown in the main area
    pub current_board_id: Option<u32>,
    /// Columns of the current board
    pub columns: Vec<Column>,
    /// Tasks of the current board, in fetch order
    pub tasks: Vec<Task>,
    pub board_status: BoardStatus,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Change the current board, notifying only on an actual change
pub fn store_select_board(store: &AppStore, board_id: Option<u32>) {
    if store.current_board_id().get_untracked() != board_id {
        *store.current_board_id().write() = board_id;
    }
}

/// Empty the board area
pub fn store_clear_board(store: &AppStore) {
    store.columns().write().clear();
    store.tasks().write().clear();
    *store.board_status().write() = BoardStatus::Idle;
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: u32) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Apply a move locally. Returns the command for a later revert.
pub fn store_apply_move(store: &AppStore, task_id: u32, column_id: u32) -> Option<MoveTask> {
    MoveTask::apply(&mut store.tasks().write(), task_id, column_id)
}

pub fn store_revert_move(store: &AppStore, command: &MoveTask) -> bool {
    command.revert(&mut store.tasks().write())
}

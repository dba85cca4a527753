//! Sync Passes
//!
//! Fetch-and-store flows shared by the sidebar, the board and drag-and-drop.

use leptos::prelude::*;

use crate::board::BoardView;
use crate::commands;
use crate::sidebar::resolve_selection;
use crate::store::{
    store_apply_move, store_clear_board, store_revert_move, store_select_board, AppStateStoreFields, AppStore,
    BoardStatus,
};

/// Fetch the workspace tree, replace the sidebar state and settle the board selection
pub async fn load_structure(store: AppStore) {
    match commands::list_workspaces().await {
        Ok(workspaces) => {
            tracing::info!(count = workspaces.len(), "workspace tree loaded");
            let next = resolve_selection(&workspaces, store.current_board_id().get_untracked());
            *store.workspaces().write() = workspaces;
            store_select_board(&store, next);
        }
        Err(err) => tracing::error!(error = %err, "failed to load workspace tree"),
    }
}

/// Status a finished pass for `requested` may publish, given the board current now.
///
/// `None` when the selection moved on; the pass must then leave the store alone.
pub fn settle_status(requested: u32, current: Option<u32>, outcome: BoardStatus) -> Option<BoardStatus> {
    (current == Some(requested)).then_some(outcome)
}

fn set_status_if_current(store: AppStore, board_id: u32, outcome: BoardStatus) {
    match settle_status(board_id, store.current_board_id().get_untracked(), outcome) {
        Some(status) => *store.board_status().write() = status,
        None => tracing::debug!(board_id, ?outcome, "board changed while loading, discarding"),
    }
}

/// Fetch columns, then tasks, of `board_id` and publish them together.
///
/// Any failure abandons the pass. Results for a board that is no longer
/// current are discarded, failures included.
pub async fn load_board(store: AppStore, board_id: u32) {
    *store.board_status().write() = BoardStatus::Loading;

    let columns = match commands::list_columns(board_id).await {
        Ok(columns) => columns,
        Err(err) => {
            tracing::error!(error = %err, board_id, "failed to load columns");
            set_status_if_current(store, board_id, BoardStatus::Failed);
            return;
        }
    };
    let tasks = match commands::list_tasks(board_id).await {
        Ok(tasks) => tasks,
        Err(err) => {
            tracing::error!(error = %err, board_id, "failed to load tasks");
            set_status_if_current(store, board_id, BoardStatus::Failed);
            return;
        }
    };

    if settle_status(board_id, store.current_board_id().get_untracked(), BoardStatus::Ready).is_none() {
        tracing::debug!(board_id, "board changed while loading, discarding");
        return;
    }

    let view = BoardView::build(&columns, &tasks);
    for orphan in &view.orphans {
        tracing::warn!(
            task_id = orphan.id,
            column_id = orphan.column_id,
            "task references a column not on this board, not rendered"
        );
    }
    tracing::info!(board_id, columns = columns.len(), cards = view.card_count(), "board loaded");

    *store.columns().write() = columns;
    *store.tasks().write() = tasks;
    set_status_if_current(store, board_id, BoardStatus::Ready);
}

/// Clear the board area when no board is selected
pub fn unload_board(store: AppStore) {
    store_clear_board(&store);
}

/// Optimistic drag-and-drop move: update the store, persist, revert on failure
pub async fn move_task(store: AppStore, task_id: u32, column_id: u32) {
    let Some(command) = store_apply_move(&store, task_id, column_id) else {
        tracing::warn!(task_id, "dropped task is not on the current board");
        return;
    };
    if command.is_noop() {
        tracing::debug!(task_id, column_id, "dropped on its own column");
    }

    match commands::move_task(task_id, column_id).await {
        Ok(_) => tracing::info!(task_id, from = command.from_column, to = column_id, "task moved"),
        Err(err) => {
            tracing::error!(error = %err, task_id, column_id, "move not persisted, reverting");
            if !store_revert_move(&store, &command) {
                tracing::warn!(task_id, "task changed since the move, revert skipped");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_status_current_board() {
        assert_eq!(settle_status(4, Some(4), BoardStatus::Ready), Some(BoardStatus::Ready));
        assert_eq!(settle_status(4, Some(4), BoardStatus::Failed), Some(BoardStatus::Failed));
    }

    #[test]
    fn test_late_failure_does_not_touch_newer_board() {
        // Board 4 was requested, board 9 got selected and loaded meanwhile
        assert_eq!(settle_status(4, Some(9), BoardStatus::Failed), None);
        assert_eq!(settle_status(4, Some(9), BoardStatus::Ready), None);
    }

    #[test]
    fn test_settle_status_after_deselect() {
        assert_eq!(settle_status(4, None, BoardStatus::Failed), None);
    }
}

//! Task Move Command
//!
//! Local half of a drag-and-drop move: applied to the store before the
//! PATCH is sent, reverted if the server rejects it.

use crate::models::Task;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTask {
    pub task_id: u32,
    pub from_column: u32,
    pub to_column: u32,
    /// Position in the task list before the move, for exact revert
    from_index: usize,
}

impl MoveTask {
    /// Move `task_id` into `to_column`, appending it after the tasks already there.
    /// Returns `None` if the task is not loaded.
    pub fn apply(tasks: &mut Vec<Task>, task_id: u32, to_column: u32) -> Option<MoveTask> {
        let from_index = tasks.iter().position(|t| t.id == task_id)?;
        let mut task = tasks.remove(from_index);
        let from_column = task.column_id;
        task.column_id = to_column;
        tasks.push(task);
        Some(MoveTask { task_id, from_column, to_column, from_index })
    }

    /// Same column: nothing moves visually, but the PATCH still goes out
    pub fn is_noop(&self) -> bool {
        self.from_column == self.to_column
    }

    /// Undo [`MoveTask::apply`]. Skipped if the task was removed or moved again since.
    pub fn revert(&self, tasks: &mut Vec<Task>) -> bool {
        let Some(index) = tasks
            .iter()
            .position(|t| t.id == self.task_id && t.column_id == self.to_column)
        else {
            return false;
        };
        let mut task = tasks.remove(index);
        task.column_id = self.from_column;
        let at = self.from_index.min(tasks.len());
        tasks.insert(at, task);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(id: u32, column_id: u32) -> Task {
        Task {
            id,
            title: format!("Task {}", id),
            description: None,
            start_date: None,
            due_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            column_id,
            created_at: None,
            updated_at: None,
        }
    }

    fn layout(tasks: &[Task]) -> Vec<(u32, u32)> {
        tasks.iter().map(|t| (t.id, t.column_id)).collect()
    }

    #[test]
    fn test_apply_appends_to_target_column() {
        let mut tasks = vec![task(1, 10), task(2, 10), task(3, 20)];
        let cmd = MoveTask::apply(&mut tasks, 1, 20).unwrap();

        assert_eq!(cmd.from_column, 10);
        assert_eq!(cmd.to_column, 20);
        assert!(!cmd.is_noop());
        assert_eq!(layout(&tasks), vec![(2, 10), (3, 20), (1, 20)]);
    }

    #[test]
    fn test_revert_restores_original_order() {
        let mut tasks = vec![task(1, 10), task(2, 10), task(3, 20)];
        let before = tasks.clone();
        let cmd = MoveTask::apply(&mut tasks, 2, 20).unwrap();

        assert!(cmd.revert(&mut tasks));
        assert_eq!(tasks, before);
    }

    #[test]
    fn test_revert_skipped_after_reload_moved_task() {
        let mut tasks = vec![task(1, 10)];
        let cmd = MoveTask::apply(&mut tasks, 1, 20).unwrap();
        tasks = vec![task(1, 30)];

        assert!(!cmd.revert(&mut tasks));
        assert_eq!(layout(&tasks), vec![(1, 30)]);
    }

    #[test]
    fn test_same_column_is_noop_move() {
        let mut tasks = vec![task(1, 10)];
        let cmd = MoveTask::apply(&mut tasks, 1, 10).unwrap();
        assert!(cmd.is_noop());
        assert_eq!(layout(&tasks), vec![(1, 10)]);
    }

    #[test]
    fn test_unknown_task() {
        let mut tasks = vec![task(1, 10)];
        assert!(MoveTask::apply(&mut tasks, 5, 20).is_none());
    }
}

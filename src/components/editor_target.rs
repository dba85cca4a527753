//! Edit Target Type
//!
//! Which modal is open, and what it edits.

use crate::models::{Board, Task, Workspace};

#[derive(Clone, Debug, PartialEq)]
pub enum EditTarget {
    NewWorkspace,
    Workspace(Workspace),
    /// New board inside the given workspace
    NewBoard { workspace_id: u32 },
    Board(Board),
    /// New task; `column_id` preselects the column the user started from
    NewTask { column_id: Option<u32> },
    Task(Task),
    Settings,
}

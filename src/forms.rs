//! Form Validation
//!
//! Turns raw modal input into request bodies. Nothing is sent unless
//! validation passes.

use chrono::NaiveDate;
use thiserror::Error;

use crate::board::next_order_index;
use crate::commands::{CreateBoardArgs, CreateColumnArgs, TaskArgs, UpdateBoardArgs, WorkspaceArgs};
use crate::models::{Column, Task, DEFAULT_WORKSPACE_ICON};

/// Date format produced by `<input type="date">`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation failures; the Display text is shown to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Give the workspace a name.")]
    MissingWorkspaceTitle,
    #[error("The board needs a name.")]
    MissingBoardTitle,
    #[error("The task needs a title.")]
    MissingTaskTitle,
    #[error("A due date is required.")]
    MissingDueDate,
    #[error("\"{0}\" is not a valid date.")]
    InvalidDate(String),
    #[error("Create a list before adding tasks.")]
    NoColumn,
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_date(value: &str) -> Result<Option<NaiveDate>, FormError> {
    match non_blank(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, DATE_FORMAT)
            .map(Some)
            .map_err(|_| FormError::InvalidDate(raw)),
    }
}

pub fn workspace_args(title: &str, icon: &str) -> Result<WorkspaceArgs, FormError> {
    let title = non_blank(title).ok_or(FormError::MissingWorkspaceTitle)?;
    let icon = non_blank(icon).unwrap_or_else(|| DEFAULT_WORKSPACE_ICON.to_string());
    Ok(WorkspaceArgs { title, icon })
}

pub fn create_board_args(title: &str, description: &str, workspace_id: u32) -> Result<CreateBoardArgs, FormError> {
    let title = non_blank(title).ok_or(FormError::MissingBoardTitle)?;
    Ok(CreateBoardArgs { title, description: non_blank(description), workspace_id })
}

pub fn update_board_args(title: &str, description: &str) -> Result<UpdateBoardArgs, FormError> {
    let title = non_blank(title).ok_or(FormError::MissingBoardTitle)?;
    Ok(UpdateBoardArgs { title, description: non_blank(description) })
}

/// New list appended after the board's existing columns. Blank titles are ignored.
pub fn column_args(title: &str, board_id: u32, existing: &[Column]) -> Option<CreateColumnArgs> {
    non_blank(title).map(|title| CreateColumnArgs {
        title,
        board_id,
        order_index: next_order_index(existing),
    })
}

/// Raw task modal input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub due_date: String,
    pub column_id: Option<u32>,
}

impl TaskForm {
    pub fn blank(column_id: Option<u32>) -> Self {
        Self { column_id, ..Default::default() }
    }

    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            start_date: task.start_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            due_date: task.due_date.format(DATE_FORMAT).to_string(),
            column_id: Some(task.column_id),
        }
    }

    pub fn validate(&self) -> Result<TaskArgs, FormError> {
        let title = non_blank(&self.title).ok_or(FormError::MissingTaskTitle)?;
        let due_date = parse_date(&self.due_date)?.ok_or(FormError::MissingDueDate)?;
        let start_date = parse_date(&self.start_date)?;
        let column_id = self.column_id.ok_or(FormError::NoColumn)?;
        Ok(TaskArgs {
            title,
            description: non_blank(&self.description),
            start_date,
            due_date,
            column_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> TaskForm {
        TaskForm {
            title: "Release".into(),
            description: "  notes ".into(),
            start_date: String::new(),
            due_date: "2024-07-15".into(),
            column_id: Some(3),
        }
    }

    #[test]
    fn test_task_form_valid() {
        let args = filled().validate().unwrap();
        assert_eq!(args.title, "Release");
        assert_eq!(args.description.as_deref(), Some("notes"));
        assert_eq!(args.start_date, None);
        assert_eq!(args.due_date, NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
        assert_eq!(args.column_id, 3);
    }

    #[test]
    fn test_empty_due_date_rejected() {
        let form = TaskForm { due_date: "  ".into(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingDueDate));
    }

    #[test]
    fn test_title_checked_first() {
        let form = TaskForm { title: String::new(), due_date: String::new(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::MissingTaskTitle));
    }

    #[test]
    fn test_bad_start_date() {
        let form = TaskForm { start_date: "15/07/2024".into(), ..filled() };
        assert_eq!(form.validate(), Err(FormError::InvalidDate("15/07/2024".into())));
    }

    #[test]
    fn test_task_needs_column() {
        let form = TaskForm { column_id: None, ..filled() };
        assert_eq!(form.validate(), Err(FormError::NoColumn));
    }

    #[test]
    fn test_form_from_task_round_trips() {
        let task = Task {
            id: 1,
            title: "Plan".into(),
            description: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 2),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            column_id: 5,
            created_at: None,
            updated_at: None,
        };
        let form = TaskForm::from_task(&task);
        assert_eq!(form.start_date, "2024-01-02");
        assert_eq!(form.due_date, "2024-01-09");

        let args = form.validate().unwrap();
        assert_eq!(args.start_date, task.start_date);
        assert_eq!(args.column_id, 5);
    }

    #[test]
    fn test_workspace_defaults_icon() {
        let args = workspace_args(" Acme ", "").unwrap();
        assert_eq!(args.title, "Acme");
        assert_eq!(args.icon, DEFAULT_WORKSPACE_ICON);
        assert_eq!(workspace_args("   ", "🚀"), Err(FormError::MissingWorkspaceTitle));
    }

    #[test]
    fn test_board_blank_description_is_null() {
        let args = create_board_args("Sprint", "  ", 1).unwrap();
        assert_eq!(args.description, None);
        assert_eq!(args.workspace_id, 1);
        assert_eq!(update_board_args("", "x"), Err(FormError::MissingBoardTitle));
    }

    #[test]
    fn test_column_args_append_after_max() {
        let existing = vec![
            Column { id: 1, title: "To Do".into(), order_index: 0, board_id: Some(1) },
            Column { id: 2, title: "Done".into(), order_index: 4, board_id: Some(1) },
        ];
        let args = column_args("Review", 1, &existing).unwrap();
        assert_eq!(args.order_index, 5);
        assert!(column_args("  ", 1, &existing).is_none());
    }
}

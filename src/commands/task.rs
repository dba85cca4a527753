//! Task Commands

use chrono::NaiveDate;
use serde::Serialize;

use super::{fetch_json, routes, send_empty, send_json, Method};
use crate::error::ApiResult;
use crate::models::Task;

// ========================
// Argument Structs
// ========================

/// Full task body, used for create (POST) and edit (PATCH).
/// `start_date` and `description` serialize as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskArgs {
    pub title: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub column_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveTaskArgs {
    pub column_id: u32,
}

// ========================
// Commands
// ========================

/// Every task on a board, across all its columns
pub async fn list_tasks(board_id: u32) -> ApiResult<Vec<Task>> {
    fetch_json(Method::Get, &routes::tasks_for_board(board_id)).await
}

pub async fn create_task(args: &TaskArgs) -> ApiResult<Task> {
    send_json(Method::Post, routes::TASKS, args).await
}

pub async fn update_task(id: u32, args: &TaskArgs) -> ApiResult<Task> {
    send_json(Method::Patch, &routes::item(routes::TASKS, id), args).await
}

/// Reassign a task to another column
pub async fn move_task(id: u32, column_id: u32) -> ApiResult<Task> {
    send_json(Method::Patch, &routes::item(routes::TASKS, id), &MoveTaskArgs { column_id }).await
}

pub async fn delete_task(id: u32) -> ApiResult<()> {
    send_empty(Method::Delete, &routes::item(routes::TASKS, id)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_args_serialize_nulls() {
        let args = TaskArgs {
            title: "Ship".into(),
            description: None,
            start_date: None,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            column_id: 4,
        };
        assert_eq!(
            serde_json::to_value(&args).unwrap(),
            json!({
                "title": "Ship",
                "description": null,
                "start_date": null,
                "due_date": "2024-05-02",
                "column_id": 4
            })
        );
    }

    #[test]
    fn test_move_args_only_carry_column() {
        let value = serde_json::to_value(MoveTaskArgs { column_id: 8 }).unwrap();
        assert_eq!(value, json!({ "column_id": 8 }));
    }
}

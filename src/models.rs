//! Frontend Models
//!
//! Data structures matching backend entities.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Icon used when a workspace is created without one
pub const DEFAULT_WORKSPACE_ICON: &str = "💼";

/// Workspace with its nested boards, as returned by `GET /api/workspaces`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: u32,
    pub title: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub boards: Vec<Board>,
}

fn default_icon() -> String {
    DEFAULT_WORKSPACE_ICON.to_string()
}

impl Workspace {
    /// Header label, e.g. "💼 Acme"
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.title)
    }
}

/// Board data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Omitted by the backend on nested boards; filled in from the owning workspace
    #[serde(default)]
    pub workspace_id: Option<u32>,
}

/// Column ("list") within a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub board_id: Option<u32>,
}

/// Task card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    pub due_date: NaiveDate,
    pub column_id: u32,
    /// Server timestamps, kept verbatim
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Stamp `workspace_id` on every nested board
pub fn link_boards(workspaces: &mut [Workspace]) {
    for ws in workspaces.iter_mut() {
        let ws_id = ws.id;
        for board in ws.boards.iter_mut() {
            board.workspace_id.get_or_insert(ws_id);
        }
    }
}

/// Find a board anywhere in the workspace tree
pub fn find_board(workspaces: &[Workspace], board_id: u32) -> Option<&Board> {
    workspaces
        .iter()
        .flat_map(|ws| ws.boards.iter())
        .find(|b| b.id == board_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_tree_deserializes() {
        let json = r#"[{"id":1,"title":"Acme","icon":"💼","boards":[{"id":10,"title":"Sprint","description":"Q1"}]}]"#;
        let mut workspaces: Vec<Workspace> = serde_json::from_str(json).unwrap();
        link_boards(&mut workspaces);

        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].label(), "💼 Acme");
        let board = &workspaces[0].boards[0];
        assert_eq!(board.title, "Sprint");
        assert_eq!(board.description.as_deref(), Some("Q1"));
        assert_eq!(board.workspace_id, Some(1));
    }

    #[test]
    fn test_workspace_without_icon_or_boards() {
        let ws: Workspace = serde_json::from_str(r#"{"id":2,"title":"Home"}"#).unwrap();
        assert_eq!(ws.icon, DEFAULT_WORKSPACE_ICON);
        assert!(ws.boards.is_empty());
    }

    #[test]
    fn test_task_deserializes_backend_response() {
        let json = r#"{
            "id": 7,
            "title": "Write docs",
            "description": null,
            "start_date": null,
            "due_date": "2024-03-01",
            "column_id": 3,
            "created_at": "2024-02-01T10:00:00",
            "updated_at": "2024-02-02T11:30:00.123456"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.column_id, 3);
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(task.start_date.is_none());
        assert!(task.updated_at.is_some());
    }

    #[test]
    fn test_find_board() {
        let workspaces = vec![Workspace {
            id: 1,
            title: "Acme".into(),
            icon: "💼".into(),
            boards: vec![Board { id: 10, title: "Sprint".into(), description: None, workspace_id: None }],
        }];
        assert_eq!(find_board(&workspaces, 10).map(|b| b.title.as_str()), Some("Sprint"));
        assert!(find_board(&workspaces, 11).is_none());
    }
}

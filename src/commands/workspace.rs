//! Workspace Commands

use serde::Serialize;

use super::{fetch_json, routes, send_empty, send_json, Method};
use crate::error::ApiResult;
use crate::models::{link_boards, Workspace};

// ========================
// Argument Structs
// ========================

/// Body for both create and edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceArgs {
    pub title: String,
    pub icon: String,
}

// ========================
// Commands
// ========================

/// Full sidebar tree: every workspace with its boards
pub async fn list_workspaces() -> ApiResult<Vec<Workspace>> {
    let mut workspaces: Vec<Workspace> = fetch_json(Method::Get, routes::WORKSPACES).await?;
    link_boards(&mut workspaces);
    Ok(workspaces)
}

pub async fn create_workspace(args: &WorkspaceArgs) -> ApiResult<Workspace> {
    send_json(Method::Post, routes::WORKSPACES, args).await
}

pub async fn update_workspace(id: u32, args: &WorkspaceArgs) -> ApiResult<Workspace> {
    send_json(Method::Patch, &routes::item(routes::WORKSPACES, id), args).await
}

/// Deletes the workspace with all its boards, columns and tasks
pub async fn delete_workspace(id: u32) -> ApiResult<()> {
    send_empty(Method::Delete, &routes::item(routes::WORKSPACES, id)).await
}

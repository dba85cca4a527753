//! Board Commands

use serde::Serialize;

use super::{routes, send_empty, send_json, Method};
use crate::error::ApiResult;
use crate::models::Board;

// ========================
// Argument Structs
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateBoardArgs {
    pub title: String,
    pub description: Option<String>,
    pub workspace_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateBoardArgs {
    pub title: String,
    pub description: Option<String>,
}

// ========================
// Commands
// ========================

pub async fn create_board(args: &CreateBoardArgs) -> ApiResult<Board> {
    let mut board: Board = send_json(Method::Post, routes::BOARDS, args).await?;
    board.workspace_id.get_or_insert(args.workspace_id);
    Ok(board)
}

pub async fn update_board(id: u32, args: &UpdateBoardArgs) -> ApiResult<Board> {
    send_json(Method::Patch, &routes::item(routes::BOARDS, id), args).await
}

/// Deletes the board with its columns and tasks
pub async fn delete_board(id: u32) -> ApiResult<()> {
    send_empty(Method::Delete, &routes::item(routes::BOARDS, id)).await
}

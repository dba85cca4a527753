//! Column Commands

use serde::Serialize;

use super::{fetch_json, routes, send_empty, send_json, Method};
use crate::error::ApiResult;
use crate::models::Column;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateColumnArgs {
    pub title: String,
    pub board_id: u32,
    pub order_index: i32,
}

#[derive(Serialize)]
struct RenameColumnArgs<'a> {
    title: &'a str,
}

/// Columns of a board, in server order (ascending `order_index`)
pub async fn list_columns(board_id: u32) -> ApiResult<Vec<Column>> {
    fetch_json(Method::Get, &routes::board_columns(board_id)).await
}

pub async fn create_column(args: &CreateColumnArgs) -> ApiResult<Column> {
    send_json(Method::Post, routes::COLUMNS, args).await
}

pub async fn rename_column(id: u32, title: &str) -> ApiResult<Column> {
    send_json(Method::Patch, &routes::item(routes::COLUMNS, id), &RenameColumnArgs { title }).await
}

/// Deletes the column and its tasks
pub async fn delete_column(id: u32) -> ApiResult<()> {
    send_empty(Method::Delete, &routes::item(routes::COLUMNS, id)).await
}

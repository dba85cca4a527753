//! REST Client
//!
//! Frontend bindings to the backend API, organized by entity.
//! Every call is a single request; nothing is retried or cached.

mod board;
mod column;
mod seed;
mod task;
mod workspace;

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::app_config;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use board::*;
pub use column::*;
pub use seed::*;
pub use task::*;
pub use workspace::*;

// ========================
// Routes
// ========================

pub(crate) mod routes {
    pub const WORKSPACES: &str = "/api/workspaces";
    pub const BOARDS: &str = "/api/boards";
    pub const COLUMNS: &str = "/api/columns";
    pub const TASKS: &str = "/tasks";
    pub const SEED: &str = "/api/seed";

    /// `{collection}/{id}`
    pub fn item(collection: &str, id: u32) -> String {
        format!("{collection}/{id}")
    }

    pub fn board_columns(board_id: u32) -> String {
        format!("{BOARDS}/{board_id}/columns")
    }

    pub fn tasks_for_board(board_id: u32) -> String {
        format!("{TASKS}?board_id={board_id}")
    }
}

// ========================
// Transport
// ========================

#[derive(Clone, Copy, Debug, PartialEq)]
enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    fn builder(self, url: &str) -> RequestBuilder {
        match self {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
            Method::Delete => Request::delete(url),
        }
    }
}

fn check_status(method: Method, url: &str, resp: Response) -> ApiResult<Response> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status {
            method: method.as_str(),
            url: url.to_string(),
            status: resp.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Request without body, decoding a JSON response
async fn fetch_json<T: DeserializeOwned>(method: Method, path: &str) -> ApiResult<T> {
    let url = app_config().url(path);
    tracing::debug!(method = method.as_str(), %url, "request");
    let resp = method
        .builder(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(method, &url, resp)?).await
}

/// Request with a JSON body, decoding a JSON response
async fn send_json<B, T>(method: Method, path: &str, body: &B) -> ApiResult<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let url = app_config().url(path);
    tracing::debug!(method = method.as_str(), %url, "request");
    let request = method
        .builder(&url)
        .json(body)
        .map_err(|e| ApiError::Encode(e.to_string()))?;
    let resp = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(check_status(method, &url, resp)?).await
}

/// Request whose response body is ignored (DELETE returns 204, seed returns anything)
async fn send_empty(method: Method, path: &str) -> ApiResult<()> {
    let url = app_config().url(path);
    tracing::debug!(method = method.as_str(), %url, "request");
    let resp = method
        .builder(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    check_status(method, &url, resp).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::routes;

    #[test]
    fn test_routes() {
        assert_eq!(routes::item(routes::WORKSPACES, 1), "/api/workspaces/1");
        assert_eq!(routes::item(routes::TASKS, 9), "/tasks/9");
        assert_eq!(routes::board_columns(10), "/api/boards/10/columns");
        assert_eq!(routes::tasks_for_board(10), "/tasks?board_id=10");
    }
}

//! Error Types
//!
//! Failures of the remote store client.

use thiserror::Error;

/// Errors returned by the REST client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response (offline, CORS, aborted)
    #[error("network error: {0}")]
    Network(String),
    /// Server answered with a non-2xx status
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(String),
    /// Request body could not be serialized
    #[error("encode error: {0}")]
    Encode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { method: "DELETE", url: "/api/boards/3".into(), status: 404 };
        assert_eq!(err.to_string(), "DELETE /api/boards/3 failed with status 404");
        assert!(err.is_not_found());
        assert!(!ApiError::Network("offline".into()).is_not_found());
    }
}

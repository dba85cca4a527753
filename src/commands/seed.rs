//! Example Data Command

use super::{routes, send_empty, Method};
use crate::error::ApiResult;

/// Ask the backend to create a sample workspace tree. Optional endpoint.
pub async fn seed_example_data() -> ApiResult<()> {
    send_empty(Method::Post, routes::SEED).await
}

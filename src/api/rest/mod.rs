//! REST API module for HTTP endpoints
//!
//! - `/api/users`, `/api/users/:id`, `/api/users/:id/posts`, `/api/users/:id/comments`, `/api/me`
//! - `/api/posts`, `/api/posts/:id`, `/api/posts/:id/author`, `/api/posts/:id/comments`, `/api/post`
//! - `/api/comments`, `/api/comments/:id`

pub mod comments;
pub mod posts;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{StoreError, StoreResult};

/// Optional case-insensitive text filter
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Standard API response wrapper
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl From<&StoreError> for ApiError {
    fn from(err: &StoreError) -> Self {
        Self {
            error: err.to_string(),
            code: err.code().to_string(),
        }
    }
}

/// HTTP status for a failed operation
pub fn status_for(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotFound(_) => StatusCode::NOT_FOUND,
        StoreError::Conflict(_) => StatusCode::CONFLICT,
        StoreError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

/// Error response for a failed operation
pub fn error_response(err: &StoreError) -> Response {
    warn!(code = err.code(), error = %err, "request rejected");
    (status_for(err), Json(ApiError::from(err))).into_response()
}

/// Wrap a handler result as a JSON response
pub fn respond<T: Serialize>(result: StoreResult<T>, success: StatusCode) -> Response {
    match result {
        Ok(data) => (success, Json(ApiResponse::new(data))).into_response(),
        Err(err) => error_response(&err),
    }
}

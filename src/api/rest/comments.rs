//! Comment endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{respond, ApiResponse};
use crate::context::AppContext;
use crate::handlers::{mutation, query};
use crate::types::{CreateCommentInput, UpdateCommentInput};

/// GET /api/comments
pub async fn list_comments(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    Json(ApiResponse::new(query::comments(&ctx)))
}

/// GET /api/comments/:id
pub async fn get_comment(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(query::comment_by_id(&ctx, &id), StatusCode::OK)
}

/// POST /api/comments - Post must exist and be published
pub async fn create_comment(
    State(ctx): State<Arc<AppContext>>,
    Json(data): Json<CreateCommentInput>,
) -> Response {
    respond(mutation::create_comment(&ctx, data), StatusCode::CREATED)
}

/// PATCH /api/comments/:id
pub async fn update_comment(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(data): Json<UpdateCommentInput>,
) -> Response {
    respond(mutation::update_comment(&ctx, &id, data), StatusCode::OK)
}

/// DELETE /api/comments/:id
pub async fn delete_comment(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Response {
    respond(mutation::delete_comment(&ctx, &id), StatusCode::OK)
}

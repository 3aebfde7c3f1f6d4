//! Post endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::{respond, ApiResponse, SearchParams};
use crate::context::AppContext;
use crate::handlers::{mutation, query};
use crate::types::{CreatePostInput, UpdatePostInput};

/// GET /api/posts - List posts, optionally filtered by title or body
pub async fn list_posts(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(ApiResponse::new(query::posts(&ctx, params.query.as_deref())))
}

/// GET /api/post - Placeholder post
pub async fn placeholder_post() -> impl IntoResponse {
    Json(ApiResponse::new(query::post()))
}

/// GET /api/posts/:id
pub async fn get_post(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(query::post_by_id(&ctx, &id), StatusCode::OK)
}

/// GET /api/posts/:id/author
pub async fn post_author(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(query::post_author(&ctx, &id), StatusCode::OK)
}

/// GET /api/posts/:id/comments
pub async fn post_comments(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Response {
    respond(query::comments_on_post(&ctx, &id), StatusCode::OK)
}

/// POST /api/posts
pub async fn create_post(
    State(ctx): State<Arc<AppContext>>,
    Json(data): Json<CreatePostInput>,
) -> Response {
    respond(mutation::create_post(&ctx, data), StatusCode::CREATED)
}

/// PATCH /api/posts/:id
pub async fn update_post(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(data): Json<UpdatePostInput>,
) -> Response {
    respond(mutation::update_post(&ctx, &id, data), StatusCode::OK)
}

/// DELETE /api/posts/:id
pub async fn delete_post(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(mutation::delete_post(&ctx, &id), StatusCode::OK)
}

//! User endpoints

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
use crate::types::{CreateUserInput, UpdateUserInput};

/// GET /api/users - List users, optionally filtered by name
pub async fn list_users(
    State(ctx): State<Arc<AppContext>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(ApiResponse::new(query::users(&ctx, params.query.as_deref())))
}

/// GET /api/me - Placeholder current user
pub async fn me() -> impl IntoResponse {
    Json(ApiResponse::new(query::me()))
}

/// GET /api/users/:id
pub async fn get_user(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(query::user_by_id(&ctx, &id), StatusCode::OK)
}

/// GET /api/users/:id/posts
pub async fn user_posts(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(query::posts_by_author(&ctx, &id), StatusCode::OK)
}

/// GET /api/users/:id/comments
pub async fn user_comments(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Response {
    respond(query::comments_by_author(&ctx, &id), StatusCode::OK)
}

/// POST /api/users
pub async fn create_user(
    State(ctx): State<Arc<AppContext>>,
    Json(data): Json<CreateUserInput>,
) -> Response {
    respond(mutation::create_user(&ctx, data), StatusCode::CREATED)
}

/// PATCH /api/users/:id
pub async fn update_user(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
    Json(data): Json<UpdateUserInput>,
) -> Response {
    respond(mutation::update_user(&ctx, &id, data), StatusCode::OK)
}

/// DELETE /api/users/:id - Cascades to the user's posts and comments
pub async fn delete_user(State(ctx): State<Arc<AppContext>>, Path(id): Path<String>) -> Response {
    respond(mutation::delete_user(&ctx, &id), StatusCode::OK)
}

//! HTTP server setup with Axum

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};

use super::rest::{comments, posts, users};
use super::sse::{comment_events_sse, post_events_sse};
use super::websocket::{comment_events_ws, post_events_ws};
use crate::context::AppContext;

/// Create the Axum router with all endpoints
pub fn create_router(ctx: Arc<AppContext>) -> Router {
    // CORS configuration - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Users
        .route("/api/me", get(users::me))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/users/:id",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
        .route("/api/users/:id/posts", get(users::user_posts))
        .route("/api/users/:id/comments", get(users::user_comments))
        // Posts
        .route("/api/post", get(posts::placeholder_post))
        .route("/api/posts", get(posts::list_posts).post(posts::create_post))
        .route(
            "/api/posts/:id",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route("/api/posts/:id/author", get(posts::post_author))
        .route("/api/posts/:id/comments", get(posts::post_comments))
        // Comments
        .route(
            "/api/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/comments/:id",
            get(comments::get_comment)
                .patch(comments::update_comment)
                .delete(comments::delete_comment),
        )
        // Subscriptions
        .route("/ws/posts", get(post_events_ws))
        .route("/ws/posts/:id/comments", get(comment_events_ws))
        .route("/sse/posts", get(post_events_sse))
        .route("/sse/posts/:id/comments", get(comment_events_sse))
        .layer(cors)
        .with_state(ctx)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::util::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(Arc::new(AppContext::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_comment_stream_on_missing_post_is_not_found() {
        let app = create_router(Arc::new(AppContext::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/sse/posts/nope/comments")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

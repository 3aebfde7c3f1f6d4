//! SSE (Server-Sent Events) module for live subscriptions
//!
//! Same event streams as the WebSocket endpoints, for clients that only
//! need server→client delivery.
//!
//! ## Endpoints
//! - `GET /sse/posts` - event name `post`
//! - `GET /sse/posts/:id/comments` - event name `comment`

pub mod handler;

pub use handler::{comment_events_sse, post_events_sse};

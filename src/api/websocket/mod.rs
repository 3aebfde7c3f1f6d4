//! WebSocket module for live subscriptions
//!
//! - `/ws/posts`: lifecycle events of live posts
//! - `/ws/posts/:id/comments`: comment events for one published post
//!
//! Each server frame is a [`events::WsMessage`]. Closing the socket ends the
//! subscription.

pub mod events;
pub mod handler;

pub use handler::{comment_events_ws, post_events_ws};

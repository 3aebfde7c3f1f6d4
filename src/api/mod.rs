//! API module for HTTP, WebSocket and SSE endpoints
//!
//! This module is the serving layer: it parses requests, dispatches to
//! [`crate::handlers`] and keeps subscriptions alive for the lifetime of a
//! connection.

pub mod http;
pub mod rest;
pub mod sse;
pub mod websocket;

pub use http::create_router;

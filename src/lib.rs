//! Postboard Server
//!
//! An in-memory users/posts/comments backend with live change
//! notifications, served over REST, WebSocket and SSE.
//!
//! # Features
//!
//! - **Relational store**: unique emails, foreign keys checked at creation,
//!   cascading deletes
//! - **Live subscriptions**: post lifecycle events and per-post comment events
//! - **Publish lifecycle**: publishing a draft announces it as created,
//!   unpublishing announces it as deleted
//! - **Lenient partial updates**: mistyped optional fields are ignored
//!
//! # Modules
//!
//! - `types`: Entities, request payloads and change events
//! - `store`: Core data engine with referential rules
//! - `bus`: Topic-keyed notification bus
//! - `handlers`: Query, mutation and subscription operations
//! - `context`: Shared store/bus/id-generator handle
//! - `api`: Axum REST, WebSocket and SSE endpoints
//! - `config`: Environment configuration
//!
//! # Example
//!
//! ```no_run
//! use postboard::handlers::{create_user, subscribe_posts, users};
//! use postboard::types::CreateUserInput;
//! use postboard::AppContext;
//!
//! let ctx = AppContext::new();
//! let _posts = subscribe_posts(&ctx);
//! create_user(
//!     &ctx,
//!     CreateUserInput {
//!         name: "Ada".to_string(),
//!         email: "ada@example.com".to_string(),
//!         age: None,
//!     },
//! )
//! .unwrap();
//! assert_eq!(users(&ctx, Some("ada")).len(), 1);
//! ```

pub mod api;
pub mod bus;
pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod ids;
pub mod seed;
pub mod store;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use bus::{NotificationBus, Subscription, Topic};
pub use config::ServerConfig;
pub use context::AppContext;
pub use error::{StoreError, StoreResult};
pub use store::Store;
pub use types::{ChangeEvent, Comment, EventEntity, MutationKind, Post, User};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! Request handlers
//!
//! The operations the serving layer dispatches to. Each takes the shared
//! [`AppContext`](crate::context::AppContext) plus parsed arguments.
//!
//! - `query`: read-only projections over the store
//! - `mutation`: create/update/delete with change notifications
//! - `subscription`: live event streams

pub mod mutation;
pub mod query;
pub mod subscription;

pub use mutation::{
    create_comment, create_post, create_user, delete_comment, delete_post, delete_user,
    post_update_event, update_comment, update_post, update_user,
};
pub use query::{
    comment_author, comment_by_id, comment_post, comments, comments_by_author, comments_on_post,
    me, post, post_author, post_by_id, posts, posts_by_author, user_by_id, users,
};
pub use subscription::{subscribe_comments, subscribe_posts};

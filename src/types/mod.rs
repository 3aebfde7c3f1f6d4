//! Data types for the Postboard server
//!
//! This module contains the entities held by the store, the request payloads
//! accepted by the mutation handlers and the change events fanned out to subscribers.

mod comment;
mod event;
mod input;
mod post;
mod user;

pub use comment::Comment;
pub use event::{ChangeEvent, EventEntity, MutationKind};
pub use input::{
    CreateCommentInput, CreatePostInput, CreateUserInput, UpdateCommentInput, UpdatePostInput,
    UpdateUserInput,
};
pub use post::{Post, PostState, PostUpdate};
pub use user::User;

/// Lenient field deserializers for partial-update payloads.
///
/// A field whose JSON value has the wrong primitive type (or is `null`) is
/// read as absent instead of failing the whole payload.
pub mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Bool(b) => Some(b),
            _ => None,
        })
    }

    /// Accepts whole numbers that fit an `i32`; floats and out-of-range values are ignored.
    pub fn integer<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
            _ => None,
        })
    }
}

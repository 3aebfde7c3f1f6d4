//! Change events delivered to subscribers
//!
//! Every event names the kind of mutation and carries the entity it concerns.
//! For a `DELETED` post that was unpublished, the entity is the snapshot taken
//! before the update.

use serde::{Deserialize, Serialize};

use super::{Comment, Post};

/// Kind of mutation observed by a subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MutationKind {
    Created,
    Updated,
    Deleted,
}

impl std::fmt::Display for MutationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MutationKind::Created => write!(f, "CREATED"),
            MutationKind::Updated => write!(f, "UPDATED"),
            MutationKind::Deleted => write!(f, "DELETED"),
        }
    }
}

/// Entity payload of a change event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventEntity {
    Post(Post),
    Comment(Comment),
}

/// A single change notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub mutation: MutationKind,
    pub data: EventEntity,
}

impl ChangeEvent {
    pub fn post(mutation: MutationKind, post: Post) -> Self {
        Self {
            mutation,
            data: EventEntity::Post(post),
        }
    }

    pub fn comment(mutation: MutationKind, comment: Comment) -> Self {
        Self {
            mutation,
            data: EventEntity::Comment(comment),
        }
    }

    /// The post carried by this event, if any
    pub fn as_post(&self) -> Option<&Post> {
        match &self.data {
            EventEntity::Post(post) => Some(post),
            EventEntity::Comment(_) => None,
        }
    }

    /// The comment carried by this event, if any
    pub fn as_comment(&self) -> Option<&Comment> {
        match &self.data {
            EventEntity::Comment(comment) => Some(comment),
            EventEntity::Post(_) => None,
        }
    }

    /// Id of the entity carried by this event
    pub fn entity_id(&self) -> &str {
        match &self.data {
            EventEntity::Post(post) => &post.id,
            EventEntity::Comment(comment) => &comment.id,
        }
    }
}

//! Post entity and its publish lifecycle

use serde::{Deserialize, Serialize};

/// A post written by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Id of the authoring user
    pub author: String,
}

impl Post {
    /// Lifecycle state derived from the `published` flag
    pub fn state(&self) -> PostState {
        PostState::from_published(self.published)
    }

    pub fn is_live(&self) -> bool {
        self.published
    }
}

/// Visibility state of a post. Only `Live` posts are seen by subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostState {
    Draft,
    Live,
}

impl PostState {
    pub fn from_published(published: bool) -> Self {
        if published {
            PostState::Live
        } else {
            PostState::Draft
        }
    }
}

/// Result of an in-place post update: the row before and after the change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdate {
    pub before: Post,
    pub after: Post,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_follows_published_flag() {
        let mut post = Post {
            id: "p1".to_string(),
            title: "Title".to_string(),
            body: "Body".to_string(),
            published: false,
            author: "u1".to_string(),
        };
        assert_eq!(post.state(), PostState::Draft);

        post.published = true;
        assert_eq!(post.state(), PostState::Live);
        assert!(post.is_live());
    }
}

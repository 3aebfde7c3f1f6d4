//! Subscription topics

use std::fmt;

/// Key that scopes a subscription
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Lifecycle of every published post
    Post,
    /// Comments on one post
    Comment(String),
}

impl Topic {
    pub fn comments_on(post_id: impl Into<String>) -> Self {
        Topic::Comment(post_id.into())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Post => write!(f, "post"),
            Topic::Comment(post_id) => write!(f, "comment:{}", post_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_keys() {
        assert_eq!(Topic::Post.to_string(), "post");
        assert_eq!(Topic::comments_on("p1").to_string(), "comment:p1");
        assert_ne!(Topic::comments_on("p1"), Topic::comments_on("p2"));
    }
}

//! Comment entity

use serde::{Deserialize, Serialize};

/// A comment left by a user on a published post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    /// Id of the authoring user
    pub author: String,
    /// Id of the post this comment belongs to
    pub post: String,
}

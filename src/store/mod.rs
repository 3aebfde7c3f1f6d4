//! Store - in-memory relational data engine
//!
//! Owns the users, posts and comments collections and enforces their
//! referential rules: unique user emails, foreign keys checked at creation,
//! and cascading deletes. Every operation validates before it mutates, so a
//! failed call leaves the store untouched.
//!
//! The store does no locking of its own; callers serialize mutations (see
//! [`crate::context::AppContext`]).

mod comments;
mod posts;
mod table;
mod users;

pub use table::Table;

use crate::error::StoreResult;
use crate::types::{
    Comment, Post, PostUpdate, UpdateCommentInput, UpdatePostInput, UpdateUserInput, User,
};

/// Everything removed by deleting a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRemoval {
    pub user: User,
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

/// Everything removed by deleting a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostRemoval {
    pub post: Post,
    pub comments: Vec<Comment>,
}

/// Users, posts and comments with process lifetime
#[derive(Debug, Default, Clone)]
pub struct Store {
    pub(crate) users: Table<User>,
    pub(crate) posts: Table<Post>,
    pub(crate) comments: Table<Comment>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// All users in insertion order
    pub fn users(&self) -> impl Iterator<Item = &User> + '_ {
        self.users.iter()
    }

    /// All posts in insertion order
    pub fn posts(&self) -> impl Iterator<Item = &Post> + '_ {
        self.posts.iter()
    }

    /// All comments in insertion order
    pub fn comments(&self) -> impl Iterator<Item = &Comment> + '_ {
        self.comments.iter()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn comment(&self, id: &str) -> Option<&Comment> {
        self.comments.get(id)
    }
}

// Operations are implemented per collection in the submodules
impl Store {
    // Users (from users.rs)
    pub fn find_user(&self, pred: impl FnMut(&User) -> bool) -> Option<&User> {
        self.users.find(pred)
    }

    pub fn list_users(&self, pred: impl FnMut(&User) -> bool) -> Vec<User> {
        users::list(self, pred)
    }

    pub fn insert_user(&mut self, user: User) -> StoreResult<User> {
        users::insert(self, user)
    }

    pub fn update_user(&mut self, id: &str, data: &UpdateUserInput) -> StoreResult<User> {
        users::update(self, id, data)
    }

    pub fn remove_user(&mut self, id: &str) -> StoreResult<UserRemoval> {
        users::remove(self, id)
    }

    // Posts (from posts.rs)
    pub fn find_post(&self, pred: impl FnMut(&Post) -> bool) -> Option<&Post> {
        self.posts.find(pred)
    }

    pub fn list_posts(&self, pred: impl FnMut(&Post) -> bool) -> Vec<Post> {
        posts::list(self, pred)
    }

    pub fn insert_post(&mut self, post: Post) -> StoreResult<Post> {
        posts::insert(self, post)
    }

    pub fn update_post(&mut self, id: &str, data: &UpdatePostInput) -> StoreResult<PostUpdate> {
        posts::update(self, id, data)
    }

    pub fn remove_post(&mut self, id: &str) -> StoreResult<PostRemoval> {
        posts::remove(self, id)
    }

    pub fn posts_by_author(&self, user_id: &str) -> Vec<Post> {
        posts::list(self, |p| p.author == user_id)
    }

    // Comments (from comments.rs)
    pub fn find_comment(&self, pred: impl FnMut(&Comment) -> bool) -> Option<&Comment> {
        self.comments.find(pred)
    }

    pub fn list_comments(&self, pred: impl FnMut(&Comment) -> bool) -> Vec<Comment> {
        comments::list(self, pred)
    }

    pub fn insert_comment(&mut self, comment: Comment) -> StoreResult<Comment> {
        comments::insert(self, comment)
    }

    pub fn update_comment(&mut self, id: &str, data: &UpdateCommentInput) -> StoreResult<Comment> {
        comments::update(self, id, data)
    }

    pub fn remove_comment(&mut self, id: &str) -> StoreResult<Comment> {
        comments::remove(self, id)
    }

    pub fn comments_by_author(&self, user_id: &str) -> Vec<Comment> {
        comments::list(self, |c| c.author == user_id)
    }

    pub fn comments_on_post(&self, post_id: &str) -> Vec<Comment> {
        comments::list(self, |c| c.post == post_id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn user(id: &str, email: &str) -> User {
        User::new(id, format!("User {}", id), email)
    }

    pub fn post(id: &str, author: &str, published: bool) -> Post {
        Post {
            id: id.to_string(),
            title: format!("Title {}", id),
            body: format!("Body {}", id),
            published,
            author: author.to_string(),
        }
    }

    pub fn comment(id: &str, author: &str, post: &str) -> Comment {
        Comment {
            id: id.to_string(),
            text: format!("Comment {}", id),
            author: author.to_string(),
            post: post.to_string(),
        }
    }
}

//! Query handlers
//!
//! Read-only projections over the store. Each call reads under the store's
//! read lock and returns owned copies, so results reflect the most recent
//! completed mutation and never a partial one.
//!
//! Large collections are filtered in parallel with rayon; results keep the
//! store's insertion order either way.

use rayon::prelude::*;

use crate::context::AppContext;
use crate::error::{StoreError, StoreResult};
use crate::types::{Comment, Post, User};
use crate::utils::contains_ignore_case;

/// Threshold for using parallel filtering (row count)
const PARALLEL_FILTER_THRESHOLD: usize = 1000;

fn filter_rows<T>(rows: Vec<&T>, pred: impl Fn(&T) -> bool + Sync + Send) -> Vec<T>
where
    T: Clone + Send + Sync,
{
    if rows.len() >= PARALLEL_FILTER_THRESHOLD {
        rows.into_par_iter().filter(|&r| pred(r)).cloned().collect()
    } else {
        rows.into_iter().filter(|&r| pred(r)).cloned().collect()
    }
}

fn non_empty(query: Option<&str>) -> Option<&str> {
    query.filter(|q| !q.is_empty())
}

/// All users, or those whose name contains `query` (case-insensitive)
pub fn users(ctx: &AppContext, query: Option<&str>) -> Vec<User> {
    let store = ctx.store.read();
    match non_empty(query) {
        None => store.users().cloned().collect(),
        Some(q) => {
            let needle = q.to_lowercase();
            filter_rows(store.users().collect(), |u| {
                contains_ignore_case(&u.name, &needle)
            })
        }
    }
}

/// All posts, or those whose title or body contains `query` (case-insensitive)
pub fn posts(ctx: &AppContext, query: Option<&str>) -> Vec<Post> {
    let store = ctx.store.read();
    match non_empty(query) {
        None => store.posts().cloned().collect(),
        Some(q) => {
            let needle = q.to_lowercase();
            filter_rows(store.posts().collect(), |p| {
                contains_ignore_case(&p.title, &needle) || contains_ignore_case(&p.body, &needle)
            })
        }
    }
}

pub fn comments(ctx: &AppContext) -> Vec<Comment> {
    ctx.store.read().comments().cloned().collect()
}

/// Fixed placeholder for the current user
pub fn me() -> User {
    User {
        id: "1234".to_string(),
        name: "Me".to_string(),
        email: "me@example.com".to_string(),
        age: None,
    }
}

/// Fixed placeholder post
pub fn post() -> Post {
    Post {
        id: "124".to_string(),
        title: "the first post".to_string(),
        body: "your post one".to_string(),
        published: true,
        author: me().id,
    }
}

pub fn user_by_id(ctx: &AppContext, id: &str) -> StoreResult<User> {
    ctx.store
        .read()
        .user(id)
        .cloned()
        .ok_or_else(|| StoreError::user_not_found(id))
}

pub fn post_by_id(ctx: &AppContext, id: &str) -> StoreResult<Post> {
    ctx.store
        .read()
        .post(id)
        .cloned()
        .ok_or_else(|| StoreError::post_not_found(id))
}

pub fn comment_by_id(ctx: &AppContext, id: &str) -> StoreResult<Comment> {
    ctx.store
        .read()
        .comment(id)
        .cloned()
        .ok_or_else(|| StoreError::comment_not_found(id))
}

// Relations between entities

pub fn posts_by_author(ctx: &AppContext, user_id: &str) -> StoreResult<Vec<Post>> {
    let store = ctx.store.read();
    if store.user(user_id).is_none() {
        return Err(StoreError::user_not_found(user_id));
    }
    Ok(store.posts_by_author(user_id))
}

pub fn comments_by_author(ctx: &AppContext, user_id: &str) -> StoreResult<Vec<Comment>> {
    let store = ctx.store.read();
    if store.user(user_id).is_none() {
        return Err(StoreError::user_not_found(user_id));
    }
    Ok(store.comments_by_author(user_id))
}

pub fn comments_on_post(ctx: &AppContext, post_id: &str) -> StoreResult<Vec<Comment>> {
    let store = ctx.store.read();
    if store.post(post_id).is_none() {
        return Err(StoreError::post_not_found(post_id));
    }
    Ok(store.comments_on_post(post_id))
}

pub fn post_author(ctx: &AppContext, post_id: &str) -> StoreResult<User> {
    let store = ctx.store.read();
    let post = store
        .post(post_id)
        .ok_or_else(|| StoreError::post_not_found(post_id))?;
    store
        .user(&post.author)
        .cloned()
        .ok_or_else(|| StoreError::user_not_found(&post.author))
}

pub fn comment_author(ctx: &AppContext, comment_id: &str) -> StoreResult<User> {
    let store = ctx.store.read();
    let comment = store
        .comment(comment_id)
        .ok_or_else(|| StoreError::comment_not_found(comment_id))?;
    store
        .user(&comment.author)
        .cloned()
        .ok_or_else(|| StoreError::user_not_found(&comment.author))
}

pub fn comment_post(ctx: &AppContext, comment_id: &str) -> StoreResult<Post> {
    let store = ctx.store.read();
    let comment = store
        .comment(comment_id)
        .ok_or_else(|| StoreError::comment_not_found(comment_id))?;
    store
        .post(&comment.post)
        .cloned()
        .ok_or_else(|| StoreError::post_not_found(&comment.post))
}

//! Post operations for the store

use crate::error::{StoreError, StoreResult};
use crate::types::{Post, PostUpdate, UpdatePostInput};

use super::{PostRemoval, Store};

pub fn list(store: &Store, mut pred: impl FnMut(&Post) -> bool) -> Vec<Post> {
    store.posts.iter().filter(|&p| pred(p)).cloned().collect()
}

/// Insert a post; its author must exist
pub fn insert(store: &mut Store, post: Post) -> StoreResult<Post> {
    if !store.users.contains(&post.author) {
        return Err(StoreError::Validation(format!(
            "Author '{}' does not exist",
            post.author
        )));
    }

    if !store.posts.insert(post.id.clone(), post.clone()) {
        return Err(StoreError::id_taken("Post", &post.id));
    }
    Ok(post)
}

/// Apply the supplied fields, returning the rows before and after
pub fn update(store: &mut Store, id: &str, data: &UpdatePostInput) -> StoreResult<PostUpdate> {
    let post = store
        .posts
        .get_mut(id)
        .ok_or_else(|| StoreError::post_not_found(id))?;
    let before = post.clone();

    if let Some(title) = &data.title {
        post.title = title.clone();
    }
    if let Some(body) = &data.body {
        post.body = body.clone();
    }
    if let Some(published) = data.published {
        post.published = published;
    }

    Ok(PostUpdate {
        before,
        after: post.clone(),
    })
}

/// Remove a post and every comment on it
pub fn remove(store: &mut Store, id: &str) -> StoreResult<PostRemoval> {
    let post = store
        .posts
        .remove(id)
        .ok_or_else(|| StoreError::post_not_found(id))?;

    let comments = store.comments.remove_where(|c| c.post == id);

    Ok(PostRemoval { post, comments })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{comment, post, user};
    use super::*;

    fn store_with_author() -> Store {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();
        store
    }

    #[test]
    fn test_insert_requires_existing_author() {
        let mut store = Store::new();
        let err = store.insert_post(post("p1", "ghost", true)).unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.post_count(), 0);
    }

    #[test]
    fn test_insert_rejects_existing_id() {
        let mut store = store_with_author();
        store.insert_post(post("p1", "u1", false)).unwrap();

        let err = store.insert_post(post("p1", "u1", true)).unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.post_count(), 1);
        assert!(!store.post("p1").unwrap().published);
    }

    #[test]
    fn test_update_returns_snapshot_before_change() {
        let mut store = store_with_author();
        store.insert_post(post("p1", "u1", true)).unwrap();

        let update = store
            .update_post(
                "p1",
                &UpdatePostInput {
                    published: Some(false),
                    ..Default::default()
                },
            )
            .unwrap();

        assert!(update.before.published);
        assert!(!update.after.published);
        assert!(!store.post("p1").unwrap().published);
    }

    #[test]
    fn test_remove_cascades_comments() {
        let mut store = store_with_author();
        store.insert_post(post("p1", "u1", true)).unwrap();
        store.insert_post(post("p2", "u1", true)).unwrap();
        store.insert_comment(comment("c1", "u1", "p1")).unwrap();
        store.insert_comment(comment("c2", "u1", "p2")).unwrap();

        let removal = store.remove_post("p1").unwrap();

        assert_eq!(removal.post.id, "p1");
        assert_eq!(removal.comments.len(), 1);
        assert_eq!(store.comment_count(), 1);
        assert!(store.comment("c2").is_some());
    }

    #[test]
    fn test_posts_by_author() {
        let mut store = store_with_author();
        store.insert_user(user("u2", "b@x.com")).unwrap();
        store.insert_post(post("p1", "u1", true)).unwrap();
        store.insert_post(post("p2", "u2", false)).unwrap();

        let posts = store.posts_by_author("u1");
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "p1");
    }
}

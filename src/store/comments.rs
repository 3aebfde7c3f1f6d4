//! Comment operations for the store

use crate::error::{StoreError, StoreResult};
use crate::types::{Comment, UpdateCommentInput};

use super::Store;

pub fn list(store: &Store, mut pred: impl FnMut(&Comment) -> bool) -> Vec<Comment> {
    store.comments.iter().filter(|&c| pred(c)).cloned().collect()
}

/// Insert a comment; the author must exist and the post must exist and be published
pub fn insert(store: &mut Store, comment: Comment) -> StoreResult<Comment> {
    if !store.users.contains(&comment.author) {
        return Err(StoreError::Validation(format!(
            "Author '{}' does not exist",
            comment.author
        )));
    }

    match store.posts.get(&comment.post) {
        Some(post) if post.published => {}
        Some(_) => {
            return Err(StoreError::Validation(format!(
                "Post '{}' is not published",
                comment.post
            )))
        }
        None => {
            return Err(StoreError::Validation(format!(
                "Post '{}' does not exist",
                comment.post
            )))
        }
    }

    if !store.comments.insert(comment.id.clone(), comment.clone()) {
        return Err(StoreError::id_taken("Comment", &comment.id));
    }
    Ok(comment)
}

pub fn update(store: &mut Store, id: &str, data: &UpdateCommentInput) -> StoreResult<Comment> {
    let comment = store
        .comments
        .get_mut(id)
        .ok_or_else(|| StoreError::comment_not_found(id))?;

    if let Some(text) = &data.text {
        comment.text = text.clone();
    }

    Ok(comment.clone())
}

pub fn remove(store: &mut Store, id: &str) -> StoreResult<Comment> {
    store
        .comments
        .remove(id)
        .ok_or_else(|| StoreError::comment_not_found(id))
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{comment, post, user};
    use super::*;

    fn seeded() -> Store {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();
        store.insert_post(post("live", "u1", true)).unwrap();
        store.insert_post(post("draft", "u1", false)).unwrap();
        store
    }

    #[test]
    fn test_insert_on_draft_post_is_rejected() {
        let mut store = seeded();
        let err = store
            .insert_comment(comment("c1", "u1", "draft"))
            .unwrap_err();

        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(store.comment_count(), 0);
    }

    #[test]
    fn test_insert_requires_author_and_post() {
        let mut store = seeded();

        assert!(matches!(
            store.insert_comment(comment("c1", "ghost", "live")),
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.insert_comment(comment("c1", "u1", "missing")),
            Err(StoreError::Validation(_))
        ));
        assert!(store.insert_comment(comment("c1", "u1", "live")).is_ok());
    }

    #[test]
    fn test_update_and_remove() {
        let mut store = seeded();
        store.insert_comment(comment("c1", "u1", "live")).unwrap();

        let updated = store
            .update_comment(
                "c1",
                &UpdateCommentInput {
                    text: Some("edited".to_string()),
                },
            )
            .unwrap();
        assert_eq!(updated.text, "edited");

        let removed = store.remove_comment("c1").unwrap();
        assert_eq!(removed.text, "edited");
        assert!(matches!(
            store.remove_comment("c1"),
            Err(StoreError::NotFound(_))
        ));
    }
}

//! User operations for the store

use std::collections::HashSet;

use crate::error::{StoreError, StoreResult};
use crate::types::{UpdateUserInput, User};

use super::{Store, UserRemoval};

pub fn list(store: &Store, mut pred: impl FnMut(&User) -> bool) -> Vec<User> {
    store.users.iter().filter(|&u| pred(u)).cloned().collect()
}

/// Insert a user; the id and the email must both be unused
pub fn insert(store: &mut Store, user: User) -> StoreResult<User> {
    if store.users.any(|u| u.email == user.email) {
        return Err(StoreError::email_taken(&user.email));
    }

    if !store.users.insert(user.id.clone(), user.clone()) {
        return Err(StoreError::id_taken("User", &user.id));
    }
    Ok(user)
}

/// Apply the supplied fields; a new email must not belong to another user
pub fn update(store: &mut Store, id: &str, data: &UpdateUserInput) -> StoreResult<User> {
    if !store.users.contains(id) {
        return Err(StoreError::user_not_found(id));
    }

    if let Some(email) = &data.email {
        if store.users.any(|u| u.id != id && &u.email == email) {
            return Err(StoreError::email_taken(email));
        }
    }

    let user = store
        .users
        .get_mut(id)
        .ok_or_else(|| StoreError::user_not_found(id))?;

    if let Some(email) = &data.email {
        user.email = email.clone();
    }
    if let Some(name) = &data.name {
        user.name = name.clone();
    }
    if let Some(age) = data.age {
        user.age = Some(age);
    }

    Ok(user.clone())
}

/// Remove a user together with their posts, the comments on those posts,
/// and every comment they wrote elsewhere
pub fn remove(store: &mut Store, id: &str) -> StoreResult<UserRemoval> {
    let user = store
        .users
        .remove(id)
        .ok_or_else(|| StoreError::user_not_found(id))?;

    let posts = store.posts.remove_where(|p| p.author == id);
    let removed_posts: HashSet<&str> = posts.iter().map(|p| p.id.as_str()).collect();

    let comments = store
        .comments
        .remove_where(|c| c.author == id || removed_posts.contains(c.post.as_str()));

    Ok(UserRemoval {
        user,
        posts,
        comments,
    })
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::{comment, post, user};
    use super::*;

    #[test]
    fn test_insert_rejects_duplicate_email() {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();

        let err = store.insert_user(user("u2", "a@x.com")).unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_insert_rejects_existing_id() {
        let mut store = Store::new();
        store
            .insert_user(User::new("u1", "Alice", "alice@x.com"))
            .unwrap();

        let err = store
            .insert_user(User::new("u1", "Mallory", "mallory@x.com"))
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.user_count(), 1);
        let names: Vec<&str> = store.users().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice"]);
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();

        let updated = store
            .update_user(
                "u1",
                &UpdateUserInput {
                    age: Some(30),
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(updated.name, "User u1");
        assert_eq!(updated.email, "a@x.com");
        assert_eq!(updated.age, Some(30));
    }

    #[test]
    fn test_update_email_conflict_leaves_user_untouched() {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();
        store.insert_user(user("u2", "b@x.com")).unwrap();

        let err = store
            .update_user(
                "u2",
                &UpdateUserInput {
                    name: Some("Renamed".to_string()),
                    email: Some("a@x.com".to_string()),
                    age: None,
                },
            )
            .unwrap_err();

        assert!(matches!(err, StoreError::Conflict(_)));
        assert_eq!(store.user("u2").unwrap().name, "User u2");
    }

    #[test]
    fn test_update_keeping_own_email_is_allowed() {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();

        let result = store.update_user(
            "u1",
            &UpdateUserInput {
                email: Some("a@x.com".to_string()),
                ..Default::default()
            },
        );

        assert!(result.is_ok());
    }

    #[test]
    fn test_update_missing_user() {
        let mut store = Store::new();
        let err = store
            .update_user("nope", &UpdateUserInput::default())
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_remove_cascades_posts_and_comments() {
        let mut store = Store::new();
        store.insert_user(user("u1", "a@x.com")).unwrap();
        store.insert_user(user("u2", "b@x.com")).unwrap();
        store.insert_post(post("p1", "u1", true)).unwrap();
        store.insert_post(post("p2", "u2", true)).unwrap();
        // u2 comments on u1's post: removed with the post
        store.insert_comment(comment("c1", "u2", "p1")).unwrap();
        // u1 comments on u2's post: removed as u1's comment
        store.insert_comment(comment("c2", "u1", "p2")).unwrap();
        // unrelated comment survives
        store.insert_comment(comment("c3", "u2", "p2")).unwrap();

        let removal = store.remove_user("u1").unwrap();

        assert_eq!(removal.user.id, "u1");
        assert_eq!(removal.posts.len(), 1);
        assert_eq!(removal.comments.len(), 2);
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.post_count(), 1);
        assert_eq!(store.comment_count(), 1);
        assert!(store.comment("c3").is_some());
    }

    #[test]
    fn test_remove_missing_user() {
        let mut store = Store::new();
        assert!(matches!(
            store.remove_user("ghost"),
            Err(StoreError::NotFound(_))
        ));
    }
}

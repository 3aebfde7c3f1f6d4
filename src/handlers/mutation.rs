//! Mutation handlers
//!
//! Each handler applies one change to the store and publishes the events it
//! implies while still holding the write lock. A failed store operation
//! returns before anything is published, so a request either commits its
//! mutation and its full event sequence, or nothing.
//!
//! # Post visibility
//!
//! Subscribers on the `post` topic only ever see `Live` posts:
//!
//! | change                               | event                     |
//! |--------------------------------------|---------------------------|
//! | created live                         | `CREATED`                 |
//! | created as draft                     | none                      |
//! | `published: true` on a draft         | `CREATED`                 |
//! | `published: false` on a live post    | `DELETED` (old snapshot)  |
//! | `published` omitted, post is live    | `UPDATED`                 |
//! | `published` omitted, post is a draft | none                      |
//! | deleted while live                   | `DELETED`                 |
//! | deleted as draft                     | none                      |

use tracing::info;

use crate::bus::{NotificationBus, Topic};
use crate::context::AppContext;
use crate::error::StoreResult;
use crate::types::{
    ChangeEvent, Comment, CreateCommentInput, CreatePostInput, CreateUserInput, MutationKind, Post,
    PostState, PostUpdate, UpdateCommentInput, UpdatePostInput, UpdateUserInput, User,
};

pub fn create_user(ctx: &AppContext, data: CreateUserInput) -> StoreResult<User> {
    let mut store = ctx.store.write();
    let user = store.insert_user(User {
        id: ctx.ids.new_id(),
        name: data.name,
        email: data.email,
        age: data.age,
    })?;

    info!(user_id = %user.id, "user created");
    Ok(user)
}

pub fn update_user(ctx: &AppContext, id: &str, data: UpdateUserInput) -> StoreResult<User> {
    let user = ctx.store.write().update_user(id, &data)?;

    info!(user_id = %id, "user updated");
    Ok(user)
}

/// Delete a user and everything that cascades from it
pub fn delete_user(ctx: &AppContext, id: &str) -> StoreResult<User> {
    let mut store = ctx.store.write();
    let removal = store.remove_user(id)?;

    publish_removed(&ctx.bus, &removal.posts, &removal.comments);

    info!(
        user_id = %id,
        posts = removal.posts.len(),
        comments = removal.comments.len(),
        "user deleted"
    );
    Ok(removal.user)
}

pub fn create_post(ctx: &AppContext, data: CreatePostInput) -> StoreResult<Post> {
    let mut store = ctx.store.write();
    let post = store.insert_post(Post {
        id: ctx.ids.new_id(),
        title: data.title,
        body: data.body,
        published: data.published,
        author: data.author,
    })?;

    if post.is_live() {
        ctx.bus
            .publish(&Topic::Post, ChangeEvent::post(MutationKind::Created, post.clone()));
    }

    info!(post_id = %post.id, published = post.published, "post created");
    Ok(post)
}

pub fn update_post(ctx: &AppContext, id: &str, data: UpdatePostInput) -> StoreResult<Post> {
    let mut store = ctx.store.write();
    let update = store.update_post(id, &data)?;

    if let Some(event) = post_update_event(&update, data.published) {
        ctx.bus.publish(&Topic::Post, event);
    }

    info!(post_id = %id, published = update.after.published, "post updated");
    Ok(update.after)
}

/// Event implied by a post update. `published` is the flag as supplied in the
/// request, `None` when the request left it out.
pub fn post_update_event(update: &PostUpdate, published: Option<bool>) -> Option<ChangeEvent> {
    match published {
        Some(_) => match (update.before.state(), update.after.state()) {
            (PostState::Draft, PostState::Live) => Some(ChangeEvent::post(
                MutationKind::Created,
                update.after.clone(),
            )),
            (PostState::Live, PostState::Draft) => Some(ChangeEvent::post(
                MutationKind::Deleted,
                update.before.clone(),
            )),
            _ => None,
        },
        None if update.after.is_live() => Some(ChangeEvent::post(
            MutationKind::Updated,
            update.after.clone(),
        )),
        None => None,
    }
}

/// Delete a post and its comments
pub fn delete_post(ctx: &AppContext, id: &str) -> StoreResult<Post> {
    let mut store = ctx.store.write();
    let removal = store.remove_post(id)?;

    publish_removed(
        &ctx.bus,
        std::slice::from_ref(&removal.post),
        &removal.comments,
    );

    info!(post_id = %id, comments = removal.comments.len(), "post deleted");
    Ok(removal.post)
}

pub fn create_comment(ctx: &AppContext, data: CreateCommentInput) -> StoreResult<Comment> {
    let mut store = ctx.store.write();
    let comment = store.insert_comment(Comment {
        id: ctx.ids.new_id(),
        text: data.text,
        author: data.author,
        post: data.post,
    })?;

    publish_comment(&ctx.bus, MutationKind::Created, &comment);

    info!(comment_id = %comment.id, post_id = %comment.post, "comment created");
    Ok(comment)
}

pub fn update_comment(ctx: &AppContext, id: &str, data: UpdateCommentInput) -> StoreResult<Comment> {
    let mut store = ctx.store.write();
    let comment = store.update_comment(id, &data)?;

    publish_comment(&ctx.bus, MutationKind::Updated, &comment);

    info!(comment_id = %id, "comment updated");
    Ok(comment)
}

pub fn delete_comment(ctx: &AppContext, id: &str) -> StoreResult<Comment> {
    let mut store = ctx.store.write();
    let comment = store.remove_comment(id)?;

    publish_comment(&ctx.bus, MutationKind::Deleted, &comment);

    info!(comment_id = %id, "comment deleted");
    Ok(comment)
}

fn publish_comment(bus: &NotificationBus, kind: MutationKind, comment: &Comment) {
    bus.publish(
        &Topic::comments_on(comment.post.as_str()),
        ChangeEvent::comment(kind, comment.clone()),
    );
}

/// Comments first, then the posts that were visible to subscribers
fn publish_removed(bus: &NotificationBus, posts: &[Post], comments: &[Comment]) {
    for comment in comments {
        publish_comment(bus, MutationKind::Deleted, comment);
    }
    for post in posts.iter().filter(|p| p.is_live()) {
        bus.publish(&Topic::Post, ChangeEvent::post(MutationKind::Deleted, post.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(published: bool, title: &str) -> Post {
        Post {
            id: "p1".to_string(),
            title: title.to_string(),
            body: "body".to_string(),
            published,
            author: "u1".to_string(),
        }
    }

    fn update(before: Post, after: Post) -> PostUpdate {
        PostUpdate { before, after }
    }

    #[test]
    fn test_draft_to_live_is_created() {
        let u = update(post(false, "t"), post(true, "t"));
        let event = post_update_event(&u, Some(true)).unwrap();

        assert_eq!(event.mutation, MutationKind::Created);
        assert!(event.as_post().unwrap().published);
    }

    #[test]
    fn test_live_to_draft_is_deleted_with_old_snapshot() {
        let u = update(post(true, "old"), post(false, "new"));
        let event = post_update_event(&u, Some(false)).unwrap();

        assert_eq!(event.mutation, MutationKind::Deleted);
        let snapshot = event.as_post().unwrap();
        assert!(snapshot.published);
        assert_eq!(snapshot.title, "old");
    }

    #[test]
    fn test_live_edit_without_flag_is_updated() {
        let u = update(post(true, "old"), post(true, "new"));
        let event = post_update_event(&u, None).unwrap();

        assert_eq!(event.mutation, MutationKind::Updated);
        assert_eq!(event.as_post().unwrap().title, "new");
    }

    #[test]
    fn test_draft_edit_is_silent() {
        let u = update(post(false, "old"), post(false, "new"));
        assert!(post_update_event(&u, None).is_none());
    }

    #[test]
    fn test_supplied_flag_without_transition_is_silent() {
        let live = update(post(true, "old"), post(true, "new"));
        assert!(post_update_event(&live, Some(true)).is_none());

        let draft = update(post(false, "t"), post(false, "t"));
        assert!(post_update_event(&draft, Some(false)).is_none());
    }
}

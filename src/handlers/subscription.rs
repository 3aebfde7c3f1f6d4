//! Subscription handlers

use tracing::debug;

use crate::bus::{Subscription, Topic};
use crate::context::AppContext;
use crate::error::{StoreError, StoreResult};

/// Lifecycle events of every live post
pub fn subscribe_posts(ctx: &AppContext) -> Subscription {
    ctx.bus.subscribe(Topic::Post)
}

/// Comment events for one post. The post must exist and be published.
pub fn subscribe_comments(ctx: &AppContext, post_id: &str) -> StoreResult<Subscription> {
    // Registering under the read lock keeps the check and the subscription
    // on the same side of any concurrent mutation.
    let store = ctx.store.read();
    match store.post(post_id) {
        Some(post) if post.is_live() => Ok(ctx.bus.subscribe(Topic::comments_on(post_id))),
        _ => {
            debug!(post_id, "comment subscription refused");
            Err(StoreError::NotFound(format!(
                "Post '{}' not found or not published",
                post_id
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::mutation::{create_post, create_user, update_post};
    use crate::types::{CreatePostInput, CreateUserInput, UpdatePostInput};

    #[test]
    fn test_comment_subscription_requires_live_post() {
        let ctx = AppContext::new();
        let user = create_user(
            &ctx,
            CreateUserInput {
                name: "A".to_string(),
                email: "a@x.com".to_string(),
                age: None,
            },
        )
        .unwrap();
        let post = create_post(
            &ctx,
            CreatePostInput {
                title: "t".to_string(),
                body: "b".to_string(),
                published: false,
                author: user.id,
            },
        )
        .unwrap();

        assert!(matches!(
            subscribe_comments(&ctx, &post.id),
            Err(StoreError::NotFound(_))
        ));
        assert!(subscribe_comments(&ctx, "missing").is_err());

        update_post(
            &ctx,
            &post.id,
            UpdatePostInput {
                published: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let sub = subscribe_comments(&ctx, &post.id).unwrap();
        assert_eq!(sub.topic(), &Topic::comments_on(post.id.as_str()));
    }
}

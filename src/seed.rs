//! Demo data loaded at startup when `POSTBOARD_SEED` is set
//!
//! Goes through the regular mutation handlers, so the usual rules apply.

use tracing::info;

use crate::context::AppContext;
use crate::error::StoreResult;
use crate::handlers::mutation::{create_comment, create_post, create_user};
use crate::types::{CreateCommentInput, CreatePostInput, CreateUserInput};

pub fn seed_demo_data(ctx: &AppContext) -> StoreResult<()> {
    let ada = create_user(
        ctx,
        CreateUserInput {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            age: Some(36),
        },
    )?;
    let grace = create_user(
        ctx,
        CreateUserInput {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            age: None,
        },
    )?;
    let linus = create_user(
        ctx,
        CreateUserInput {
            name: "Linus".to_string(),
            email: "linus@example.com".to_string(),
            age: Some(27),
        },
    )?;

    let engines = create_post(
        ctx,
        CreatePostInput {
            title: "Notes on the analytical engine".to_string(),
            body: "Cards, columns and a mill.".to_string(),
            published: true,
            author: ada.id.clone(),
        },
    )?;
    let compilers = create_post(
        ctx,
        CreatePostInput {
            title: "Why compilers".to_string(),
            body: "Let the machine write the machine code.".to_string(),
            published: true,
            author: grace.id.clone(),
        },
    )?;
    create_post(
        ctx,
        CreatePostInput {
            title: "Kernel draft".to_string(),
            body: "Just a hobby, won't be big.".to_string(),
            published: false,
            author: linus.id.clone(),
        },
    )?;

    for (text, author, post) in [
        ("Beautiful idea.", &grace.id, &engines.id),
        ("Does it loop?", &linus.id, &engines.id),
        ("Agreed, and debug it too.", &ada.id, &compilers.id),
    ] {
        create_comment(
            ctx,
            CreateCommentInput {
                text: text.to_string(),
                author: author.clone(),
                post: post.clone(),
            },
        )?;
    }

    let store = ctx.store.read();
    info!(
        users = store.user_count(),
        posts = store.post_count(),
        comments = store.comment_count(),
        "demo data loaded"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_populates_store() {
        let ctx = AppContext::new();
        seed_demo_data(&ctx).unwrap();

        let store = ctx.store.read();
        assert_eq!(store.user_count(), 3);
        assert_eq!(store.post_count(), 3);
        assert_eq!(store.comment_count(), 3);
    }
}

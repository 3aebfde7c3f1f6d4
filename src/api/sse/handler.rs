//! SSE subscription handlers

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
};
use futures::Stream;
use tokio_stream::StreamExt;

use crate::api::rest::error_response;
use crate::api::websocket::events::WsMessage;
use crate::bus::Subscription;
use crate::context::AppContext;
use crate::handlers::subscription::{subscribe_comments, subscribe_posts};

const KEEP_ALIVE_SECS: u64 = 30;

/// Turn a subscription into an SSE stream of named events.
/// The subscription lives as long as the stream, i.e. the client connection.
fn event_stream(
    mut subscription: Subscription,
    name: &'static str,
) -> impl Stream<Item = Result<Event, Infallible>> {
    async_stream::stream! {
        while let Some(event) = subscription.next().await {
            let msg = WsMessage::new(event);
            yield Ok::<_, Infallible>(Event::default()
                .event(name)
                .data(serde_json::to_string(&msg).unwrap_or_default()));
        }
    }
}

fn into_sse(stream: impl Stream<Item = Result<Event, Infallible>> + Send + 'static) -> Response {
    Sse::new(stream)
        .keep_alive(KeepAlive::default().interval(Duration::from_secs(KEEP_ALIVE_SECS)))
        .into_response()
}

/// GET /sse/posts - Live post lifecycle events
pub async fn post_events_sse(State(ctx): State<Arc<AppContext>>) -> Response {
    into_sse(event_stream(subscribe_posts(&ctx), "post"))
}

/// GET /sse/posts/:id/comments - Live comment events for a published post
pub async fn comment_events_sse(
    State(ctx): State<Arc<AppContext>>,
    Path(post_id): Path<String>,
) -> Response {
    match subscribe_comments(&ctx, &post_id) {
        Ok(subscription) => into_sse(event_stream(subscription, "comment")),
        Err(err) => error_response(&err),
    }
}

//! WebSocket connection handler

use std::sync::Arc;

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    response::Response,
};
use tokio_stream::StreamExt;
use tracing::debug;

use super::events::{ClientMessage, PongMessage, WsMessage};
use crate::api::rest::error_response;
use crate::bus::Subscription;
use crate::context::AppContext;
use crate::handlers::subscription::{subscribe_comments, subscribe_posts};

/// GET /ws/posts - Live post lifecycle events
pub async fn post_events_ws(ws: WebSocketUpgrade, State(ctx): State<Arc<AppContext>>) -> Response {
    let subscription = subscribe_posts(&ctx);
    ws.on_upgrade(move |socket| handle_socket(socket, subscription))
}

/// GET /ws/posts/:id/comments - Live comment events for a published post
pub async fn comment_events_ws(
    ws: WebSocketUpgrade,
    Path(post_id): Path<String>,
    State(ctx): State<Arc<AppContext>>,
) -> Response {
    match subscribe_comments(&ctx, &post_id) {
        Ok(subscription) => ws.on_upgrade(move |socket| handle_socket(socket, subscription)),
        Err(err) => error_response(&err),
    }
}

/// Forward subscription events until either side goes away.
/// Dropping the subscription on return unregisters it from the bus.
async fn handle_socket(mut socket: WebSocket, mut subscription: Subscription) {
    debug!(topic = %subscription.topic(), "websocket subscriber connected");

    loop {
        tokio::select! {
            // Bus events to client
            event = subscription.next() => {
                match event {
                    Some(event) => {
                        if let Ok(json) = serde_json::to_string(&WsMessage::new(event)) {
                            if socket.send(Message::Text(json)).await.is_err() {
                                break; // Client disconnected
                            }
                        }
                    }
                    None => break, // Bus gone
                }
            }

            // Handle client messages
            result = socket.recv() => {
                match result {
                    Some(Ok(msg)) => {
                        if !handle_client_message(msg, &mut socket).await {
                            break; // Client requested close
                        }
                    }
                    Some(Err(_)) => break, // WebSocket error
                    None => break, // Client disconnected
                }
            }
        }
    }

    debug!(topic = %subscription.topic(), "websocket subscriber disconnected");
}

/// Handle a message from the client
/// Returns false if the connection should be closed
async fn handle_client_message(msg: Message, socket: &mut WebSocket) -> bool {
    match msg {
        Message::Text(text) => {
            if let Ok(ClientMessage::Ping) = serde_json::from_str::<ClientMessage>(&text) {
                if let Ok(json) = serde_json::to_string(&PongMessage::default()) {
                    let _ = socket.send(Message::Text(json)).await;
                }
            }
            true
        }
        Message::Binary(_) => true, // Ignore binary messages
        Message::Ping(data) => {
            let _ = socket.send(Message::Pong(data)).await;
            true
        }
        Message::Pong(_) => true,   // Ignore pong responses
        Message::Close(_) => false, // Client requested close
    }
}

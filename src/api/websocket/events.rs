//! WebSocket message types for live subscriptions

use serde::{Deserialize, Serialize};

use crate::types::ChangeEvent;

/// WebSocket message wrapper with metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WsMessage {
    /// The change event
    #[serde(flatten)]
    pub event: ChangeEvent,

    /// Unix timestamp when the message was sent
    pub timestamp: i64,
}

impl WsMessage {
    pub fn new(event: ChangeEvent) -> Self {
        Self {
            event,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Client message types
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Ping for heartbeat
    Ping,
}

/// Pong response message
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PongMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
}

impl Default for PongMessage {
    fn default() -> Self {
        Self {
            msg_type: "pong".to_string(),
        }
    }
}

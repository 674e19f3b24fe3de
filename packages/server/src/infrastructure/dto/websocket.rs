//! WebSocket message DTOs.
//!
//! Every frame is a UTF-8 JSON object tagged by its `type` field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire shape of an accepted chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessageDto {
    pub id: String,
    pub message: String,
    /// RFC 3339 UTC timestamp with millisecond precision
    pub timestamp: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Server → client notices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerNotice {
    /// Identity assigned to the connection (handshake step 2)
    UserConnected {
        #[serde(rename = "userId")]
        user_id: String,
    },
    /// Full Message Log at handshake time (handshake step 3)
    ChatHistory { messages: Vec<ChatMessageDto> },
    /// Welcome text (handshake step 4)
    SystemMessage { message: String },
    /// An accepted chat message, sent to every connection
    NewMessage { message: ChatMessageDto },
    /// Rejection of the sender's last frame, sent to the sender only
    Error { message: String },
}

impl ServerNotice {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Client → server frames, as written by the bundled client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    ChatMessage { message: String },
}

impl ClientFrame {
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Kind tag of a chat frame
pub const CHAT_MESSAGE_KIND: &str = "chat_message";

/// An inbound frame decoded leniently, so that shape errors can be reported
/// to the sender instead of failing the whole decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundFrame {
    /// `type == "chat_message"`; `message` is `None` when missing or not a string
    ChatMessage { message: Option<String> },
    /// Any other (or missing) `type`
    Other { kind: Option<String> },
}

impl InboundFrame {
    /// Decode a text frame. Only text that is not JSON at all is an error.
    pub fn decode(text: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(text)?;
        let kind = value.get("type").and_then(Value::as_str);

        let frame = match kind {
            Some(CHAT_MESSAGE_KIND) => InboundFrame::ChatMessage {
                message: value
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            other => InboundFrame::Other {
                kind: other.map(str::to_string),
            },
        };
        Ok(frame)
    }
}

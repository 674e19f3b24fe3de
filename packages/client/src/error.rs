//! Error types for the chat client.

use thiserror::Error;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The WebSocket handshake with the server failed
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// An established connection was closed or broke
    #[error("Connection lost: {0}")]
    ConnectionLost(String),
}

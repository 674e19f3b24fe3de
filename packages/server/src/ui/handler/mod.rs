//! HTTP and WebSocket handlers.

mod http;
mod websocket;

pub use http::{create_project, health_check, list_projects, root};
pub use websocket::websocket_handler;

//! Real-time chat broadcast server.
//!
//! Every WebSocket connection receives an ephemeral user id, the full chat
//! history and a welcome notice. Accepted chat messages are appended to an
//! in-memory log and then broadcast to every connected client, the sender
//! included.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

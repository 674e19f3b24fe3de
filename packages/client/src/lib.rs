//! WebSocket chat client with fixed-interval reconnection.

mod domain;
mod error;
mod formatter;
mod runner;
mod session;
mod ui;

pub use domain::{ChatTimeline, ReconnectPolicy, TimelineEvent};
pub use error::ClientError;
pub use runner::run_client;

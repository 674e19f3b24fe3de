//! WebSocket chat client with reconnection support.
//!
//! Reads lines from stdin and sends them as chat messages. On disconnect it
//! waits a fixed interval (3 seconds by default) and reconnects with a fresh
//! identity, indefinitely, until the user exits with Ctrl+C or Ctrl+D.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin agora-client
//! cargo run --bin agora-client -- --url ws://127.0.0.1:3000/ws
//! ```

use std::time::Duration;

use agora_client::{ReconnectPolicy, run_client};
use agora_shared::logger::setup_logger;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agora-client")]
#[command(about = "WebSocket chat client with history replay and automatic reconnection", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, default_value = "ws://127.0.0.1:8080/ws")]
    url: String,

    /// Seconds to wait before reconnecting after a disconnect
    #[arg(long, default_value_t = 3)]
    reconnect_interval_secs: u64,
}

#[tokio::main]
async fn main() {
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();
    let policy = ReconnectPolicy::fixed(Duration::from_secs(args.reconnect_interval_secs));

    run_client(args.url, policy).await;
}

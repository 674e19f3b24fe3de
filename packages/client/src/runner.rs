//! Client execution logic with reconnection support.

use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::{domain::ReconnectPolicy, session::run_client_session, ui::spawn_input_reader};

/// Run the WebSocket client with reconnection logic
///
/// Reconnects after every lost or failed connection, waiting the policy's
/// fixed interval, until the user exits.
pub async fn run_client(url: String, policy: ReconnectPolicy) {
    let mut input_rx = spawn_input_reader();
    let mut attempt: u64 = 0;

    loop {
        if !discard_pending_input(&mut input_rx) {
            break;
        }

        tracing::info!("Attempting to connect to {}", url);

        match run_client_session(&url, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                break;
            }
            Err(e) => {
                attempt += 1;
                let delay = policy.delay_before(attempt);
                tracing::warn!("{}", e);
                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {})",
                    delay.as_secs_f32(),
                    attempt
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}

/// Drop lines typed while disconnected. Returns `false` once the user has exited.
fn discard_pending_input(input_rx: &mut mpsc::UnboundedReceiver<String>) -> bool {
    loop {
        match input_rx.try_recv() {
            Ok(line) => tracing::warn!("Not connected, message not sent: {}", line),
            Err(TryRecvError::Empty) => return true,
            Err(TryRecvError::Disconnected) => return false,
        }
    }
}

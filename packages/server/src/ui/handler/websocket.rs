//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{ui::state::AppState, usecase::FrameOutcome};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Everything addressed to this connection (handshake notices, broadcasts,
/// error notices) goes through `rx`, so the socket has a single writer.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.into())).await {
                tracing::debug!("WebSocket write failed: {}", e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Channel for everything the server pushes to this client
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    let session = state.connect_participant_usecase.execute(tx).await;
    let user_id = session.user_id.clone();
    tracing::info!("New chat user connected: {}", user_id);

    let state_clone = state.clone();
    let user_id_for_recv = user_id.clone();

    // Frames of one connection are handled strictly in arrival order
    let mut recv_task = tokio::spawn(async move {
        let handler = &state_clone.handle_frame_usecase;

        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error for user {}: {}", user_id_for_recv, e);
                    break;
                }
            };

            let outcome = match msg {
                Message::Text(text) => handler.execute(&user_id_for_recv, text.as_str()).await,
                Message::Binary(data) => handler.execute_binary(&user_id_for_recv, &data).await,
                Message::Close(_) => {
                    tracing::info!("Client '{}' requested close", user_id_for_recv);
                    break;
                }
                // Ping/pong is handled automatically by the WebSocket protocol
                Message::Ping(_) | Message::Pong(_) => continue,
            };

            if let FrameOutcome::Rejected(rejection) = outcome {
                tracing::debug!("Rejected frame from '{}': {}", user_id_for_recv, rejection);
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let remaining = state
        .disconnect_participant_usecase
        .execute(&session.user_id)
        .await;
    tracing::info!(
        "Chat user disconnected: {} ({} still connected)",
        user_id,
        remaining
    );
}

//! WebSocket client session management.
//!
//! One session covers exactly one connection. All per-connection state
//! (assigned user id, timeline) lives in the session and is dropped with it.

use agora_server::infrastructure::dto::websocket::{ClientFrame, ServerNotice};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    domain::{ChatTimeline, TimelineEvent},
    error::ClientError,
    formatter::MessageFormatter,
    ui::show,
};

/// Run one chat session until the connection drops or the user exits.
///
/// # Returns
///
/// * `Ok(())` - the user ended input (no reconnection wanted)
/// * `Err(ClientError)` - the connection could not be made or was lost
pub async fn run_client_session(
    url: &str,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    let (ws_stream, _response) = connect_async(url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to chat server!");
    println!("\nType messages and press Enter to send. Press Ctrl+C to exit.\n");

    let (mut write, mut read) = ws_stream.split();
    let mut timeline = ChatTimeline::new();

    loop {
        tokio::select! {
            incoming = read.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => render(&mut timeline, text.as_str()),
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::info!("Server closed the connection");
                        return Err(ClientError::ConnectionLost("closed by server".to_string()));
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("WebSocket read error: {}", e);
                        return Err(ClientError::ConnectionLost(e.to_string()));
                    }
                }
            }
            line = input_rx.recv() => {
                let Some(line) = line else {
                    write.close().await.ok();
                    return Ok(());
                };
                let json = match (ClientFrame::ChatMessage { message: line }).encode() {
                    Ok(json) => json,
                    Err(e) => {
                        tracing::error!("Failed to serialize message: {}", e);
                        continue;
                    }
                };
                if let Err(e) = write.send(Message::Text(json.into())).await {
                    tracing::warn!("Failed to send message: {}", e);
                    return Err(ClientError::ConnectionLost(e.to_string()));
                }
            }
        }
    }
}

fn render(timeline: &mut ChatTimeline, text: &str) {
    let notice = match serde_json::from_str::<ServerNotice>(text) {
        Ok(notice) => notice,
        Err(e) => {
            tracing::debug!("Unknown notice from server: {}", e);
            show(&MessageFormatter::format_raw_message(text));
            return;
        }
    };

    match timeline.apply(notice) {
        TimelineEvent::Identified(user_id) => {
            show(&MessageFormatter::format_user_connected(&user_id));
        }
        TimelineEvent::HistoryLoaded(messages) => {
            show(&MessageFormatter::format_history(
                &messages,
                timeline.user_id(),
            ));
        }
        TimelineEvent::MessageAdded(message) => {
            let is_me = timeline.is_mine(&message);
            show(&MessageFormatter::format_chat_message(&message, is_me));
        }
        TimelineEvent::Duplicate => {}
        TimelineEvent::System(message) => show(&MessageFormatter::format_system_message(&message)),
        TimelineEvent::ServerError(message) => show(&MessageFormatter::format_error(&message)),
    }
}

//! WebSocket を使った MessagePusher 実装（Connection Registry）
//!
//! ## 責務
//!
//! - 接続中のクライアントと、その WebSocket 書き込みタスクへの `UnboundedSender` を管理
//! - クライアントへのメッセージ送信（push_to, broadcast）
//!
//! WebSocket の生成と書き込みタスクは UI 層（`ui/handler/websocket.rs`）が担当し、
//! この実装は生成された sender を受け取って送信に使用します。

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{MessagePushError, MessagePusher, PusherChannel, UserId};

/// WebSocket を使った MessagePusher 実装
///
/// 全ての操作は `clients` の Mutex で直列化されるため、broadcast 中に
/// 登録・登録解除が割り込むことはありません。
pub struct WebSocketMessagePusher {
    /// Key: UserId, Value: 接続の送信チャンネル
    clients: Arc<Mutex<HashMap<UserId, PusherChannel>>>,
}

impl WebSocketMessagePusher {
    pub fn new(clients: Arc<Mutex<HashMap<UserId, PusherChannel>>>) -> Self {
        Self { clients }
    }
}

impl Default for WebSocketMessagePusher {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(HashMap::new())))
    }
}

#[async_trait]
impl MessagePusher for WebSocketMessagePusher {
    async fn register_client(&self, user_id: UserId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        tracing::debug!("Client '{}' registered to MessagePusher", user_id);
        clients.insert(user_id, sender);
    }

    async fn unregister_client(&self, user_id: &UserId) {
        let mut clients = self.clients.lock().await;
        if clients.remove(user_id).is_some() {
            tracing::debug!("Client '{}' unregistered from MessagePusher", user_id);
        }
    }

    async fn push_to(&self, user_id: &UserId, content: &str) -> Result<(), MessagePushError> {
        let clients = self.clients.lock().await;

        let sender = clients
            .get(user_id)
            .ok_or_else(|| MessagePushError::ClientNotFound(user_id.to_string()))?;
        sender
            .send(content.to_string())
            .map_err(|e| MessagePushError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed message to client '{}'", user_id);
        Ok(())
    }

    async fn broadcast(&self, content: &str) -> usize {
        let clients = self.clients.lock().await;
        let mut delivered = 0;

        for (user_id, sender) in clients.iter() {
            // 切断済みだがまだ登録解除されていない接続はスキップ
            if sender.is_closed() {
                tracing::debug!("Client '{}' is not open, skipping broadcast", user_id);
                continue;
            }
            match sender.send(content.to_string()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("Failed to push message to client '{}': {}", user_id, e);
                }
            }
        }

        tracing::debug!("Broadcasted message to {}/{} clients", delivered, clients.len());
        delivered
    }

    async fn connected_user_ids(&self) -> Vec<UserId> {
        let clients = self.clients.lock().await;
        clients.keys().cloned().collect()
    }
}

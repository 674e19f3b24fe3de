//! UseCase: チャットの状態取得（ヘルスチェック用）

use std::sync::Arc;

use crate::domain::{MessageLogRepository, MessagePusher};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatStatus {
    pub connections: usize,
    pub messages: usize,
}

pub struct GetChatStatusUseCase {
    repository: Arc<dyn MessageLogRepository>,
    message_pusher: Arc<dyn MessagePusher>,
}

impl GetChatStatusUseCase {
    pub fn new(
        repository: Arc<dyn MessageLogRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            message_pusher,
        }
    }

    pub async fn execute(&self) -> ChatStatus {
        ChatStatus {
            connections: self.message_pusher.connected_user_ids().await.len(),
            messages: self.repository.count().await,
        }
    }
}

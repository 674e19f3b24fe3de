//! InMemory Message Log Repository 実装
//!
//! `Vec` を追記専用のログとして使用します。件数の上限や古いメッセージの削除はなく、
//! メモリ使用量はメッセージ数に比例して増え続けます。
//! 重複チェックは ID の `HashSet` で行うため、追記のコストはログの長さに依存しません。

use std::{collections::HashSet, sync::Arc};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{ChatMessage, MessageId, MessageLogRepository, RepositoryError};

/// ログ本体と ID インデックス（常に同じ Mutex の下で更新する）
#[derive(Default)]
struct MessageLog {
    messages: Vec<ChatMessage>,
    ids: HashSet<MessageId>,
}

/// インメモリ Message Log Repository 実装
#[derive(Default)]
pub struct InMemoryMessageLogRepository {
    log: Arc<Mutex<MessageLog>>,
}

#[async_trait]
impl MessageLogRepository for InMemoryMessageLogRepository {
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError> {
        let mut log = self.log.lock().await;
        if !log.ids.insert(message.id.clone()) {
            return Err(RepositoryError::Duplicate(message.id.into_string()));
        }
        log.messages.push(message);
        Ok(())
    }

    async fn snapshot(&self) -> Vec<ChatMessage> {
        let log = self.log.lock().await;
        log.messages.clone()
    }

    async fn count(&self) -> usize {
        let log = self.log.lock().await;
        log.messages.len()
    }
}

//! UseCase: メッセージ送信処理（コミットとブロードキャスト）
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - Message Log への追記と、送信者を含む全接続への new_message ブロードキャスト
//!
//! ### どのような状況を想定しているか
//! - 正常系：追記とブロードキャスト（送信者自身にもエコーされる）
//! - エッジケース：閉じた接続が混ざっていても残りの接続には届く
//! - 異常系：追記に失敗した場合はブロードキャストしない
//! - 並行性：呼び出し側が abort されても追記済みメッセージは配信される
//! - 並行性：送信と接続が並行しても、各接続は全メッセージを一度ずつ順番通りに受け取る

use std::sync::Arc;

use agora_shared::time::Clock;

use crate::{
    domain::{
        ChatMessage, MessageContent, MessageIdFactory, MessageLogRepository, MessagePusher,
        Timestamp, UserId,
    },
    infrastructure::dto::websocket::ServerNotice,
};

use super::{CommitLock, error::SendMessageError};

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（Message Log）
    repository: Arc<dyn MessageLogRepository>,
    /// MessagePusher（Connection Registry）
    message_pusher: Arc<dyn MessagePusher>,
    /// サーバー側のタイムスタンプの取得元
    clock: Arc<dyn Clock>,
    commit_lock: CommitLock,
}

impl SendMessageUseCase {
    pub fn new(
        repository: Arc<dyn MessageLogRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
        commit_lock: CommitLock,
    ) -> Self {
        Self {
            repository,
            message_pusher,
            clock,
            commit_lock,
        }
    }

    /// メッセージ送信を実行
    ///
    /// 新しい ID とサーバー時刻で ChatMessage を作成し、Message Log に追記してから
    /// 全接続（送信者を含む）に `new_message` をブロードキャストする。
    ///
    /// 追記とブロードキャストは別タスクで実行し、呼び出し側はその完了を待つだけにする。
    /// 呼び出し側のタスクが abort されても、追記済みのメッセージは必ず配信される。
    ///
    /// # Returns
    ///
    /// * `Ok(ChatMessage)` - 追記されたメッセージ
    /// * `Err(SendMessageError)` - 追記前に失敗（Message Log は変更されない）
    pub async fn execute(
        &self,
        user_id: UserId,
        content: MessageContent,
    ) -> Result<ChatMessage, SendMessageError> {
        let repository = self.repository.clone();
        let message_pusher = self.message_pusher.clone();
        let clock = self.clock.clone();
        let commit_lock = self.commit_lock.clone();

        let commit = tokio::spawn(async move {
            let _guard = commit_lock.lock().await;

            let message = ChatMessage::new(
                MessageIdFactory::generate(),
                content,
                Timestamp::new(clock.now_millis()),
                user_id,
            );

            // 追記後に失敗しないよう、通知は先にエンコードしておく
            let json = ServerNotice::NewMessage {
                message: message.clone().into(),
            }
            .encode()
            .map_err(|e| SendMessageError::EncodeFailed(e.to_string()))?;

            // 1. Message Log に追記（コミットポイント）
            repository
                .append(message.clone())
                .await
                .map_err(|e| SendMessageError::AppendFailed(e.to_string()))?;

            // 2. 全接続にブロードキャスト
            let delivered = message_pusher.broadcast(&json).await;

            tracing::info!(
                "Message '{}' from '{}' delivered to {} clients: {}",
                message.id,
                message.user_id,
                delivered,
                message.content.as_str()
            );

            Ok::<_, SendMessageError>(message)
        });

        commit
            .await
            .map_err(|e| SendMessageError::CommitTaskFailed(e.to_string()))?
    }
}

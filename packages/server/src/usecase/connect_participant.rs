//! UseCase: 参加者接続処理（セッションハンドシェイク）
//!
//! 新しい接続ごとに一度だけ、以下を順番に実行します（いずれも新しい接続への直接送信）。
//!
//! 1. UserId を発行して MessagePusher に登録
//! 2. `user_connected` を送信
//! 3. Message Log の全件を `chat_history` として送信
//! 4. `system_message`（ウェルカムメッセージ）を送信
//!
//! 送信に失敗してもログを残すだけで登録は取り消しません。

use std::sync::Arc;

use agora_shared::time::Clock;

use crate::{
    domain::{
        MessageLogRepository, MessagePusher, PusherChannel, Session, Timestamp, UserId,
        UserIdFactory,
    },
    infrastructure::dto::websocket::{ChatMessageDto, ServerNotice},
};

use super::CommitLock;

/// ハンドシェイクの最後に送るウェルカムメッセージ
pub const WELCOME_MESSAGE: &str = "Welcome to the chat! You are now connected.";

/// 参加者接続のユースケース
pub struct ConnectParticipantUseCase {
    /// Message Log（履歴スナップショットの取得のみ）
    repository: Arc<dyn MessageLogRepository>,
    /// MessagePusher（Connection Registry）
    message_pusher: Arc<dyn MessagePusher>,
    clock: Arc<dyn Clock>,
    commit_lock: CommitLock,
}

impl ConnectParticipantUseCase {
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

    /// 参加者接続を実行
    ///
    /// # Arguments
    ///
    /// * `sender` - クライアントへのメッセージ送信用チャンネル
    ///
    /// # Returns
    ///
    /// 新しく発行された UserId を持つ Session（失敗しない）
    pub async fn execute(&self, sender: PusherChannel) -> Session {
        let _guard = self.commit_lock.lock().await;

        // 1. UserId を発行して登録
        let session = Session::new(
            UserIdFactory::generate(),
            Timestamp::new(self.clock.now_millis()),
        );
        self.message_pusher
            .register_client(session.user_id.clone(), sender)
            .await;

        // 2. user_connected
        self.push_notice(
            &session.user_id,
            ServerNotice::UserConnected {
                user_id: session.user_id.as_str().to_string(),
            },
        )
        .await;

        // 3. chat_history
        let messages: Vec<ChatMessageDto> = self
            .repository
            .snapshot()
            .await
            .into_iter()
            .map(ChatMessageDto::from)
            .collect();
        tracing::debug!(
            "Replaying {} messages to '{}'",
            messages.len(),
            session.user_id
        );
        self.push_notice(&session.user_id, ServerNotice::ChatHistory { messages })
            .await;

        // 4. system_message
        self.push_notice(
            &session.user_id,
            ServerNotice::SystemMessage {
                message: WELCOME_MESSAGE.to_string(),
            },
        )
        .await;

        session
    }

    async fn push_notice(&self, user_id: &UserId, notice: ServerNotice) {
        let json = match notice.encode() {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to encode handshake notice for '{}': {}", user_id, e);
                return;
            }
        };
        if let Err(e) = self.message_pusher.push_to(user_id, &json).await {
            tracing::warn!("Failed to deliver handshake notice to '{}': {}", user_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatMessage, MessageContent, MessageIdFactory},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryMessageLogRepository,
        },
        usecase::new_commit_lock,
    };
    use agora_shared::time::FixedClock;
    use tokio::sync::mpsc;

    fn create_usecase() -> (
        ConnectParticipantUseCase,
        Arc<InMemoryMessageLogRepository>,
        Arc<WebSocketMessagePusher>,
    ) {
        let repository = Arc::new(InMemoryMessageLogRepository::default());
        let pusher = Arc::new(WebSocketMessagePusher::default());
        let usecase = ConnectParticipantUseCase::new(
            repository.clone(),
            pusher.clone(),
            Arc::new(FixedClock::new(1000)),
            new_commit_lock(),
        );
        (usecase, repository, pusher)
    }

    fn decode(json: &str) -> ServerNotice {
        serde_json::from_str(json).unwrap()
    }

    #[tokio::test]
    async fn test_handshake_sends_three_notices_in_order() {
        // テスト項目: user_connected, chat_history, system_message の順で送信される
        // given (前提条件):
        let (usecase, _repository, pusher) = create_usecase();
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        let session = usecase.execute(tx).await;

        // then (期待する結果):
        assert_eq!(
            decode(&rx.recv().await.unwrap()),
            ServerNotice::UserConnected {
                user_id: session.user_id.as_str().to_string()
            }
        );
        assert_eq!(
            decode(&rx.recv().await.unwrap()),
            ServerNotice::ChatHistory { messages: vec![] }
        );
        assert_eq!(
            decode(&rx.recv().await.unwrap()),
            ServerNotice::SystemMessage {
                message: WELCOME_MESSAGE.to_string()
            }
        );
        assert!(rx.try_recv().is_err());
        assert_eq!(pusher.connected_user_ids().await, vec![session.user_id]);
        assert_eq!(session.connected_at.value(), 1000);
    }

    #[tokio::test]
    async fn test_handshake_replays_history_in_stored_order() {
        // テスト項目: 既存のメッセージが保存順で chat_history に含まれる
        // given (前提条件):
        let (usecase, repository, _pusher) = create_usecase();
        let author = UserIdFactory::generate();
        for text in ["first", "second"] {
            repository
                .append(ChatMessage::new(
                    MessageIdFactory::generate(),
                    MessageContent::new(text.to_string()).unwrap(),
                    Timestamp::new(500),
                    author.clone(),
                ))
                .await
                .unwrap();
        }
        let (tx, mut rx) = mpsc::unbounded_channel();

        // when (操作):
        usecase.execute(tx).await;

        // then (期待する結果):
        rx.recv().await.unwrap();
        match decode(&rx.recv().await.unwrap()) {
            ServerNotice::ChatHistory { messages } => {
                let texts: Vec<&str> = messages.iter().map(|m| m.message.as_str()).collect();
                assert_eq!(texts, vec!["first", "second"]);
                assert!(messages.iter().all(|m| m.user_id == author.as_str()));
            }
            other => panic!("unexpected notice: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_each_connection_gets_a_new_user_id() {
        // テスト項目: 再接続を含め、接続ごとに異なる UserId が発行される
        // given (前提条件):
        let (usecase, _repository, pusher) = create_usecase();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        // when (操作):
        let first = usecase.execute(tx1).await;
        let second = usecase.execute(tx2).await;

        // then (期待する結果):
        assert_ne!(first.user_id, second.user_id);
        assert_eq!(pusher.connected_user_ids().await.len(), 2);
    }

    #[tokio::test]
    async fn test_handshake_registers_even_if_delivery_fails() {
        // テスト項目: 送信に失敗しても登録は維持される
        // given (前提条件):
        let (usecase, _repository, pusher) = create_usecase();
        let (tx, rx) = mpsc::unbounded_channel();
        drop(rx);

        // when (操作):
        let session = usecase.execute(tx).await;

        // then (期待する結果):
        assert_eq!(pusher.connected_user_ids().await, vec![session.user_id]);
    }
}

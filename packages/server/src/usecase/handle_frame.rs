//! UseCase: 受信フレームの処理
//!
//! 接続から受け取った 1 フレームを解釈し、
//!
//! - JSON でない → 送信者に `error`（Failed to process message）
//! - `chat_message` 以外の type → 何もしない
//! - `chat_message` で message が無い・文字列でない・空白のみ →
//!   送信者に `error`（Invalid message format）
//! - それ以外 → trim した本文で SendMessageUseCase を実行
//!
//! 拒否されたフレームが Message Log やブロードキャストに影響することはありません。

use std::sync::Arc;

use crate::{
    domain::{ChatMessage, MessageContent, MessagePusher, UserId},
    infrastructure::dto::websocket::{InboundFrame, ServerNotice},
};

use super::{error::FrameRejection, send_message::SendMessageUseCase};

/// 1 フレームの処理結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOutcome {
    /// メッセージとして受理され、追記・ブロードキャストされた
    Accepted(ChatMessage),
    /// 未対応の type なので無視した
    Ignored { kind: Option<String> },
    /// 拒否して送信者に error 通知を送った
    Rejected(FrameRejection),
}

/// 受信フレーム処理のユースケース
pub struct HandleFrameUseCase {
    send_message_usecase: Arc<SendMessageUseCase>,
    /// 送信者への error 通知に使用
    message_pusher: Arc<dyn MessagePusher>,
}

impl HandleFrameUseCase {
    pub fn new(
        send_message_usecase: Arc<SendMessageUseCase>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            send_message_usecase,
            message_pusher,
        }
    }

    /// テキストフレームを処理
    pub async fn execute(&self, user_id: &UserId, text: &str) -> FrameOutcome {
        let frame = match InboundFrame::decode(text) {
            Ok(frame) => frame,
            Err(e) => {
                tracing::warn!("Failed to parse frame from '{}' as JSON: {}", user_id, e);
                return self.reject(user_id, FrameRejection::Malformed).await;
            }
        };

        let raw = match frame {
            InboundFrame::ChatMessage { message } => message,
            InboundFrame::Other { kind } => {
                tracing::debug!("Ignoring frame of type {:?} from '{}'", kind, user_id);
                return FrameOutcome::Ignored { kind };
            }
        };

        let Some(content) = raw.and_then(|raw| MessageContent::new(raw).ok()) else {
            tracing::warn!("Invalid chat message from '{}'", user_id);
            return self
                .reject(user_id, FrameRejection::InvalidMessageFormat)
                .await;
        };

        match self
            .send_message_usecase
            .execute(user_id.clone(), content)
            .await
        {
            Ok(message) => FrameOutcome::Accepted(message),
            Err(e) => {
                tracing::error!("Failed to commit message from '{}': {}", user_id, e);
                self.reject(user_id, FrameRejection::ProcessingFailed).await
            }
        }
    }

    /// バイナリフレームを処理
    ///
    /// UTF-8 として読めればテキストフレームと同じ扱いにする。
    pub async fn execute_binary(&self, user_id: &UserId, data: &[u8]) -> FrameOutcome {
        match std::str::from_utf8(data) {
            Ok(text) => self.execute(user_id, text).await,
            Err(_) => {
                tracing::warn!("Received non UTF-8 binary frame from '{}'", user_id);
                self.reject(user_id, FrameRejection::Malformed).await
            }
        }
    }

    async fn reject(&self, user_id: &UserId, rejection: FrameRejection) -> FrameOutcome {
        let notice = ServerNotice::Error {
            message: rejection.to_string(),
        };
        match notice.encode() {
            Ok(json) => {
                if let Err(e) = self.message_pusher.push_to(user_id, &json).await {
                    tracing::warn!("Failed to deliver error notice to '{}': {}", user_id, e);
                }
            }
            Err(e) => tracing::error!("Failed to encode error notice: {}", e),
        }
        FrameOutcome::Rejected(rejection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{MessageLogRepository, MockMessagePusher},
        infrastructure::{
            message_pusher::WebSocketMessagePusher, repository::InMemoryMessageLogRepository,
        },
        usecase::new_commit_lock,
    };
    use agora_shared::time::FixedClock;
    use tokio::sync::mpsc;

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - 不正なフレームは送信者にだけ error が返り、追記もブロードキャストもされない
    // - 未知の type は何も起こさない
    // - 正しいフレームは trim されて追記・ブロードキャストされる
    // ========================================

    struct Fixture {
        usecase: HandleFrameUseCase,
        repository: Arc<InMemoryMessageLogRepository>,
    }

    fn fixture_with_pusher(pusher: Arc<dyn MessagePusher>) -> Fixture {
        let repository = Arc::new(InMemoryMessageLogRepository::default());
        let send_message_usecase = Arc::new(SendMessageUseCase::new(
            repository.clone(),
            pusher.clone(),
            Arc::new(FixedClock::new(1000)),
            new_commit_lock(),
        ));
        Fixture {
            usecase: HandleFrameUseCase::new(send_message_usecase, pusher),
            repository,
        }
    }

    fn user(id: &str) -> UserId {
        UserId::new(id.to_string()).unwrap()
    }

    /// error を 1 回だけ送信者に送り、ブロードキャストしない MessagePusher
    fn expect_single_error(expected: &'static str) -> MockMessagePusher {
        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().times(0);
        pusher
            .expect_push_to()
            .withf(move |user_id: &UserId, json: &str| {
                let notice: ServerNotice = serde_json::from_str(json).unwrap();
                user_id.as_str() == "alice"
                    && notice
                        == ServerNotice::Error {
                            message: expected.to_string(),
                        }
            })
            .times(1)
            .returning(|_, _| Ok(()));
        pusher
    }

    #[tokio::test]
    async fn test_missing_message_is_rejected() {
        // テスト項目: message が無い chat_message は Invalid message format で拒否される
        // given (前提条件):
        let f = fixture_with_pusher(Arc::new(expect_single_error("Invalid message format")));

        // when (操作):
        let outcome = f
            .usecase
            .execute(&user("alice"), r#"{"type":"chat_message"}"#)
            .await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            FrameOutcome::Rejected(FrameRejection::InvalidMessageFormat)
        );
        assert_eq!(f.repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_non_string_message_is_rejected() {
        // テスト項目: message が文字列でない場合も拒否される
        let f = fixture_with_pusher(Arc::new(expect_single_error("Invalid message format")));

        let outcome = f
            .usecase
            .execute(&user("alice"), r#"{"type":"chat_message","message":123}"#)
            .await;

        assert_eq!(
            outcome,
            FrameOutcome::Rejected(FrameRejection::InvalidMessageFormat)
        );
        assert_eq!(f.repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_whitespace_only_message_is_rejected() {
        // テスト項目: trim すると空になるメッセージは拒否される
        let f = fixture_with_pusher(Arc::new(expect_single_error("Invalid message format")));

        let outcome = f
            .usecase
            .execute(&user("alice"), r#"{"type":"chat_message","message":"   "}"#)
            .await;

        assert_eq!(
            outcome,
            FrameOutcome::Rejected(FrameRejection::InvalidMessageFormat)
        );
        assert_eq!(f.repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_non_json_frame_is_rejected() {
        // テスト項目: JSON でないフレームは Failed to process message で拒否される
        let f = fixture_with_pusher(Arc::new(expect_single_error("Failed to process message")));

        let outcome = f.usecase.execute(&user("alice"), "not json").await;

        assert_eq!(outcome, FrameOutcome::Rejected(FrameRejection::Malformed));
        assert_eq!(f.repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_unknown_type_is_ignored() {
        // テスト項目: 未知の type は通知・追記・ブロードキャストのいずれも起こさない
        // given (前提条件):
        let mut pusher = MockMessagePusher::new();
        pusher.expect_broadcast().times(0);
        pusher.expect_push_to().times(0);
        let f = fixture_with_pusher(Arc::new(pusher));

        // when (操作):
        let outcome = f.usecase.execute(&user("alice"), r#"{"type":"ping"}"#).await;

        // then (期待する結果):
        assert_eq!(
            outcome,
            FrameOutcome::Ignored {
                kind: Some("ping".to_string())
            }
        );
        assert_eq!(f.repository.count().await, 0);
    }

    #[tokio::test]
    async fn test_chat_message_is_trimmed_and_broadcast() {
        // テスト項目: " hi " が "hi" として追記され、全員にブロードキャストされる
        // given (前提条件):
        let pusher = Arc::new(WebSocketMessagePusher::default());
        let f = fixture_with_pusher(pusher.clone());
        let (tx_x, mut rx_x) = mpsc::unbounded_channel();
        let (tx_y, mut rx_y) = mpsc::unbounded_channel();
        pusher.register_client(user("x"), tx_x).await;
        pusher.register_client(user("y"), tx_y).await;

        // when (操作):
        let outcome = f
            .usecase
            .execute(&user("x"), r#"{"type":"chat_message","message":" hi "}"#)
            .await;

        // then (期待する結果):
        let FrameOutcome::Accepted(message) = outcome else {
            panic!("expected message to be accepted");
        };
        assert_eq!(message.content.as_str(), "hi");
        assert_eq!(f.repository.snapshot().await, vec![message.clone()]);
        for rx in [&mut rx_x, &mut rx_y] {
            let notice: ServerNotice = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
            match notice {
                ServerNotice::NewMessage { message: dto } => {
                    assert_eq!(dto.message, "hi");
                    assert_eq!(dto.user_id, "x");
                    assert_eq!(dto.id, message.id.as_str());
                }
                other => panic!("unexpected notice: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_binary_frame_with_utf8_json_is_processed() {
        // テスト項目: UTF-8 の JSON を含むバイナリフレームはテキストと同様に処理される
        let pusher = Arc::new(WebSocketMessagePusher::default());
        let f = fixture_with_pusher(pusher);

        let outcome = f
            .usecase
            .execute_binary(&user("x"), br#"{"type":"chat_message","message":"bin"}"#)
            .await;

        assert!(matches!(outcome, FrameOutcome::Accepted(_)));
        assert_eq!(f.repository.count().await, 1);
    }

    #[tokio::test]
    async fn test_binary_frame_with_invalid_utf8_is_rejected() {
        let f = fixture_with_pusher(Arc::new(expect_single_error("Failed to process message")));

        let outcome = f.usecase.execute_binary(&user("alice"), &[0xff, 0xfe]).await;

        assert_eq!(outcome, FrameOutcome::Rejected(FrameRejection::Malformed));
    }
}

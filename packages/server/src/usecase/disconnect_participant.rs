//! UseCase: 参加者切断処理
//!
//! 接続のクローズ・エラー時に呼ばれ、Connection Registry から登録を解除します。
//! Message Log には影響しません。

use std::sync::Arc;

use crate::domain::{MessagePusher, UserId};

/// 参加者切断のユースケース
pub struct DisconnectParticipantUseCase {
    message_pusher: Arc<dyn MessagePusher>,
}

impl DisconnectParticipantUseCase {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 参加者切断を実行（冪等）
    ///
    /// # Returns
    ///
    /// 切断後に残っている接続数
    pub async fn execute(&self, user_id: &UserId) -> usize {
        self.message_pusher.unregister_client(user_id).await;
        self.message_pusher.connected_user_ids().await.len()
    }
}

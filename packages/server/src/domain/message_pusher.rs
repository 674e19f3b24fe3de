//! MessagePusher trait 定義
//!
//! 接続中のクライアントへのメッセージ送信（通知）を抽象化します。
//! 実装は接続中クライアントの集合（Connection Registry）を所有します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{MessagePushError, UserId};

/// クライアントへの送信チャンネル
///
/// 受信側は接続ごとの書き込みタスクが保持し、WebSocket に流します。
pub type PusherChannel = mpsc::UnboundedSender<String>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// クライアントを登録
    async fn register_client(&self, user_id: UserId, sender: PusherChannel);

    /// クライアントの登録を解除（存在しなくてもエラーにしない）
    async fn unregister_client(&self, user_id: &UserId);

    /// 特定のクライアントに送信
    async fn push_to(&self, user_id: &UserId, content: &str) -> Result<(), MessagePushError>;

    /// 登録中の全クライアントに送信
    ///
    /// 一部のクライアントへの送信失敗は他のクライアントへの送信を妨げず、
    /// 登録解除も行わない。送信できたクライアント数を返す。
    async fn broadcast(&self, content: &str) -> usize;

    /// 登録中のクライアントの UserId 一覧
    async fn connected_user_ids(&self) -> Vec<UserId>;
}

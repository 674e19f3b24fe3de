//! エンティティ

use super::value_object::{
    MessageContent, MessageId, ProjectDescription, ProjectId, ProjectName, Timestamp, UserId,
};

/// チャットメッセージ
///
/// Message Log に追加された後は不変で、プロセスが生きている間は削除されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: MessageId,
    pub content: MessageContent,
    /// サーバーが付与した作成時刻（クライアントの申告値は使わない）
    pub timestamp: Timestamp,
    /// 送信元セッションの UserId
    pub user_id: UserId,
}

impl ChatMessage {
    pub fn new(
        id: MessageId,
        content: MessageContent,
        timestamp: Timestamp,
        user_id: UserId,
    ) -> Self {
        Self {
            id,
            content,
            timestamp,
            user_id,
        }
    }
}

/// 接続中のセッション
///
/// 接続ごとに作成され、切断時に破棄される。再接続時には新しい UserId が発行される。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub connected_at: Timestamp,
}

impl Session {
    pub fn new(user_id: UserId, connected_at: Timestamp) -> Self {
        Self {
            user_id,
            connected_at,
        }
    }
}

/// プロジェクト（HTTP API で扱うレコード）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: ProjectName,
    pub description: ProjectDescription,
}

//! ID の生成
//!
//! 全ての ID は UUID v4 で生成します。衝突しない前提で再利用はしません。

use uuid::Uuid;

use super::value_object::{MessageId, ProjectId, UserId};

/// 接続ごとの UserId を生成
pub struct UserIdFactory;

impl UserIdFactory {
    pub fn generate() -> UserId {
        UserId(Uuid::new_v4().to_string())
    }
}

/// ChatMessage の ID を生成
pub struct MessageIdFactory;

impl MessageIdFactory {
    pub fn generate() -> MessageId {
        MessageId(Uuid::new_v4().to_string())
    }
}

/// Project の ID を生成
pub struct ProjectIdFactory;

impl ProjectIdFactory {
    pub fn generate() -> ProjectId {
        ProjectId(Uuid::new_v4().to_string())
    }
}

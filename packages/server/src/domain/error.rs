//! ドメイン層のエラー型

use thiserror::Error;

/// 値オブジェクト生成時のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueObjectError {
    /// 前後の空白を除去したメッセージが空
    #[error("message content must not be empty")]
    EmptyMessageContent,

    /// プロジェクトのフィールドが空
    #[error("project {0} must not be empty")]
    EmptyProjectField(&'static str),

    /// 識別子が空
    #[error("identifier must not be empty")]
    InvalidIdentifier,
}

/// MessagePusher のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessagePushError {
    /// 送信先のクライアントが登録されていない
    #[error("client '{0}' is not registered")]
    ClientNotFound(String),

    /// 送信に失敗（受信側のチャンネルが閉じている）
    #[error("failed to push message: {0}")]
    PushFailed(String),
}

/// Repository のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// 同じ ID のレコードが既に存在する
    #[error("record '{0}' already exists")]
    Duplicate(String),
}

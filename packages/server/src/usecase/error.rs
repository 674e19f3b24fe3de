//! UseCase 層のエラー型

use thiserror::Error;

/// 受信フレームを拒否した理由
///
/// `Display` の文字列はそのまま送信者への `error` 通知の本文になる。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameRejection {
    /// JSON として解釈できないフレーム
    #[error("Failed to process message")]
    Malformed,

    /// chat_message の message が無い・文字列でない・空白のみ
    #[error("Invalid message format")]
    InvalidMessageFormat,

    /// 受理したメッセージのコミットに失敗
    #[error("Failed to process message")]
    ProcessingFailed,
}

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// Message Log への追記に失敗
    #[error("failed to append message: {0}")]
    AppendFailed(String),

    /// new_message 通知のエンコードに失敗
    #[error("failed to encode notice: {0}")]
    EncodeFailed(String),

    /// コミット用タスクが panic した
    #[error("commit task failed: {0}")]
    CommitTaskFailed(String),
}

/// プロジェクト作成のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateProjectError {
    #[error("Invalid project data. Name and description are required.")]
    InvalidInput,

    #[error("failed to store project: {0}")]
    StoreFailed(String),
}

//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{ChatMessage, Project, RepositoryError};

/// Message Log Repository trait
///
/// 受理済みチャットメッセージの追記専用ストア。履歴再送の唯一の情報源。
#[async_trait]
pub trait MessageLogRepository: Send + Sync {
    /// メッセージを末尾に追加する（コミットポイント）
    ///
    /// 同じ ID のメッセージが既に存在する場合は `RepositoryError::Duplicate`。
    async fn append(&self, message: ChatMessage) -> Result<(), RepositoryError>;

    /// 現在のメッセージ一覧を追加順で取得
    async fn snapshot(&self) -> Vec<ChatMessage>;

    /// メッセージ件数を取得
    async fn count(&self) -> usize;
}

/// Project Repository trait
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// プロジェクトを追加
    async fn add(&self, project: Project) -> Result<(), RepositoryError>;

    /// 全てのプロジェクトを追加順で取得
    async fn list(&self) -> Vec<Project>;
}

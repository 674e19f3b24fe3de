//! UseCase 層
//!
//! ドメイン層の trait（Repository, MessagePusher）にのみ依存し、
//! チャットのビジネスロジックを実装します。

use std::sync::Arc;

use tokio::sync::Mutex;

mod connect_participant;
mod disconnect_participant;
mod error;
mod get_chat_status;
mod handle_frame;
mod project;
mod send_message;

pub use connect_participant::{ConnectParticipantUseCase, WELCOME_MESSAGE};
pub use disconnect_participant::DisconnectParticipantUseCase;
pub use error::{CreateProjectError, FrameRejection, SendMessageError};
pub use get_chat_status::{ChatStatus, GetChatStatusUseCase};
pub use handle_frame::{FrameOutcome, HandleFrameUseCase};
pub use project::{CreateProjectUseCase, ListProjectsUseCase};
pub use send_message::SendMessageUseCase;

/// Message Log への追記とブロードキャスト、およびハンドシェイクを直列化するロック
///
/// 追記 → ブロードキャストの間と、登録 → 履歴スナップショット → 送信の間に
/// 保持されるため、新規接続が履歴とブロードキャストの両方を取りこぼすことはなく、
/// ブロードキャストは Message Log の順序で全接続に届く。
pub type CommitLock = Arc<Mutex<()>>;

/// 新しい CommitLock を作成
pub fn new_commit_lock() -> CommitLock {
    Arc::new(Mutex::new(()))
}

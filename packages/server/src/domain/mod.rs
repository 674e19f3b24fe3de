//! ドメイン層
//!
//! チャットのエンティティ・値オブジェクトと、ドメイン層が必要とする
//! インターフェース（Repository, MessagePusher）を定義します。

pub mod entity;
pub mod error;
pub mod factory;
pub mod message_pusher;
pub mod repository;
pub mod value_object;

pub use entity::{ChatMessage, Project, Session};
pub use error::{MessagePushError, RepositoryError, ValueObjectError};
pub use factory::{MessageIdFactory, ProjectIdFactory, UserIdFactory};
#[cfg(test)]
pub use message_pusher::MockMessagePusher;
pub use message_pusher::{MessagePusher, PusherChannel};
pub use repository::{MessageLogRepository, ProjectRepository};
pub use value_object::{
    MessageContent, MessageId, ProjectDescription, ProjectId, ProjectName, Timestamp, UserId,
};

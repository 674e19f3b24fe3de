//! Infrastructure 層
//!
//! ドメイン層の trait の具体的な実装（インメモリ DB, WebSocket 送信）と、
//! 通信プロトコルの DTO を提供します。

pub mod dto;
pub mod message_pusher;
pub mod repository;

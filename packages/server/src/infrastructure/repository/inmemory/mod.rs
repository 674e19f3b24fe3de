//! インメモリ実装
//!
//! プロセスの再起動で全てのデータが失われます。

pub mod message_log;
pub mod project;

pub use message_log::InMemoryMessageLogRepository;
pub use project::InMemoryProjectRepository;

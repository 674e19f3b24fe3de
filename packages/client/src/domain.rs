//! Domain logic for client-side operations.
//!
//! Pure state and policy, kept free of I/O so it can be tested directly.

use std::time::Duration;

use agora_server::infrastructure::dto::websocket::{ChatMessageDto, ServerNotice};

/// Reconnection policy: wait a fixed interval, retry forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    interval: Duration,
}

impl ReconnectPolicy {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(3);

    pub fn fixed(interval: Duration) -> Self {
        Self { interval }
    }

    /// Delay before reconnection attempt number `attempt` (1-based).
    ///
    /// The delay never grows and there is no attempt limit.
    pub fn delay_before(&self, _attempt: u64) -> Duration {
        self.interval
    }
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self::fixed(Self::DEFAULT_INTERVAL)
    }
}

/// What a notice changed in the local timeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimelineEvent {
    Identified(String),
    HistoryLoaded(Vec<ChatMessageDto>),
    MessageAdded(ChatMessageDto),
    /// A `new_message` whose id is already in the timeline
    Duplicate,
    System(String),
    ServerError(String),
}

/// Local view of one connection's chat: the assigned identity and the
/// messages seen so far, de-duplicated by message id.
///
/// A new timeline is created for every connection, so the identity of a
/// previous connection is never carried over.
#[derive(Debug, Default)]
pub struct ChatTimeline {
    user_id: Option<String>,
    messages: Vec<ChatMessageDto>,
}

impl ChatTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessageDto] {
        &self.messages
    }

    pub fn is_mine(&self, message: &ChatMessageDto) -> bool {
        self.user_id.as_deref() == Some(message.user_id.as_str())
    }

    pub fn apply(&mut self, notice: ServerNotice) -> TimelineEvent {
        match notice {
            ServerNotice::UserConnected { user_id } => {
                self.user_id = Some(user_id.clone());
                TimelineEvent::Identified(user_id)
            }
            ServerNotice::ChatHistory { messages } => {
                self.messages = messages.clone();
                TimelineEvent::HistoryLoaded(messages)
            }
            ServerNotice::NewMessage { message } => {
                if self.messages.iter().any(|m| m.id == message.id) {
                    return TimelineEvent::Duplicate;
                }
                self.messages.push(message.clone());
                TimelineEvent::MessageAdded(message)
            }
            ServerNotice::SystemMessage { message } => TimelineEvent::System(message),
            ServerNotice::Error { message } => TimelineEvent::ServerError(message),
        }
    }
}

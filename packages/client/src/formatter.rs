//! Message formatting utilities for client display.

use agora_server::infrastructure::dto::websocket::ChatMessageDto;
use agora_shared::time::{rfc3339_to_timestamp, timestamp_to_clock_label};

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the identity assigned by the server
    pub fn format_user_connected(user_id: &str) -> String {
        format!("\nConnected as {}\n", user_id)
    }

    /// Format the history replayed on connection
    ///
    /// # Arguments
    ///
    /// * `messages` - Messages in stored order
    /// * `current_user_id` - The current connection's user id (to mark as "me")
    pub fn format_history(messages: &[ChatMessageDto], current_user_id: Option<&str>) -> String {
        let mut output = String::new();
        output.push_str("\n============================================================\n");
        output.push_str("History:\n");

        if messages.is_empty() {
            output.push_str("(No messages yet)\n");
        } else {
            for message in messages {
                let is_me = current_user_id == Some(message.user_id.as_str());
                output.push_str(&Self::format_line(message, is_me));
            }
        }

        output.push_str("============================================================\n");
        output
    }

    /// Format a chat message
    pub fn format_chat_message(message: &ChatMessageDto, is_me: bool) -> String {
        format!("\n{}", Self::format_line(message, is_me))
    }

    /// Format a system notice
    pub fn format_system_message(message: &str) -> String {
        format!("\n* {}\n", message)
    }

    /// Format an error notice from the server
    pub fn format_error(message: &str) -> String {
        format!("\n! Server error: {}\n", message)
    }

    /// Format a raw message that could not be parsed
    pub fn format_raw_message(text: &str) -> String {
        format!("\n{}\n", text)
    }

    fn format_line(message: &ChatMessageDto, is_me: bool) -> String {
        let time = rfc3339_to_timestamp(&message.timestamp)
            .map(timestamp_to_clock_label)
            .unwrap_or_else(|| message.timestamp.clone());
        let author = short_id(&message.user_id);
        let me_suffix = if is_me { " (me)" } else { "" };
        format!("[{}] {}{}: {}\n", time, author, me_suffix, message.message)
    }
}

/// First segment of a UUID, which is enough to tell users apart on screen
fn short_id(user_id: &str) -> &str {
    user_id.split('-').next().unwrap_or(user_id)
}

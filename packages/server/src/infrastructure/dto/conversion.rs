//! Conversion logic between DTOs and domain entities.

use agora_shared::time::timestamp_to_rfc3339;

use crate::domain::entity;
use crate::infrastructure::dto::{http as http_dto, websocket as ws_dto};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<entity::ChatMessage> for ws_dto::ChatMessageDto {
    fn from(model: entity::ChatMessage) -> Self {
        Self {
            id: model.id.into_string(),
            message: model.content.into_string(),
            timestamp: timestamp_to_rfc3339(model.timestamp.value()),
            user_id: model.user_id.into_string(),
        }
    }
}

impl From<entity::Project> for http_dto::ProjectDto {
    fn from(model: entity::Project) -> Self {
        Self {
            id: model.id.into_string(),
            name: model.name.as_str().to_string(),
            description: model.description.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MessageContent, MessageId, Timestamp, UserId};

    #[test]
    fn test_domain_chat_message_to_dto() {
        // テスト項目: ドメインの ChatMessage が RFC 3339 のタイムスタンプを持つ DTO に変換される
        // given (前提条件):
        let domain_msg = entity::ChatMessage::new(
            MessageId::new("m1".to_string()).unwrap(),
            MessageContent::new("Hi!".to_string()).unwrap(),
            Timestamp::new(1672531200000),
            UserId::new("bob".to_string()).unwrap(),
        );

        // when (操作):
        let dto_msg: ws_dto::ChatMessageDto = domain_msg.into();

        // then (期待する結果):
        assert_eq!(dto_msg.id, "m1");
        assert_eq!(dto_msg.message, "Hi!");
        assert_eq!(dto_msg.timestamp, "2023-01-01T00:00:00.000Z");
        assert_eq!(dto_msg.user_id, "bob");
    }
}

//! Chat message entity <-> model mapper

use adopt_core::entities::ChatMessage;

use crate::models::ChatMessageModel;

/// Convert ChatMessageModel to ChatMessage entity
impl From<ChatMessageModel> for ChatMessage {
    fn from(model: ChatMessageModel) -> Self {
        ChatMessage {
            id: model.id,
            sender_id: model.sender_id,
            receiver_id: model.receiver_id,
            content: model.content,
            created_at: model.created_at,
        }
    }
}

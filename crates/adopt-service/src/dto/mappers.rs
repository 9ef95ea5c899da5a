//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.
//! Animal conversion lives in the image formatter, which owns the Base64 step.

use adopt_core::entities::{ChatMessage, User};

use super::responses::{ChatMessageResponse, UserResponse};

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content,
            created_at: message.created_at,
        }
    }
}

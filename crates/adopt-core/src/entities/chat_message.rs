//! Chat message entity - a direct message from one user to another

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Maximum length of a chat message, in characters
pub const MAX_CONTENT_LENGTH: usize = 2000;

/// Chat message entity, immutable once persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    /// Create a new ChatMessage
    pub fn new(sender_id: Uuid, receiver_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender_id,
            receiver_id,
            content,
            created_at: Utc::now(),
        }
    }

    /// Check if the message belongs to the conversation between two users
    pub fn is_between(&self, a: Uuid, b: Uuid) -> bool {
        (self.sender_id == a && self.receiver_id == b)
            || (self.sender_id == b && self.receiver_id == a)
    }
}

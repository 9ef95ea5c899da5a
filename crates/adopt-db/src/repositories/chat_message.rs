//! PostgreSQL implementation of ChatMessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use adopt_core::entities::ChatMessage;
use adopt_core::error::DomainError;
use adopt_core::traits::{ChatMessageRepository, ConversationQuery, RepoResult};

use crate::models::ChatMessageModel;

use super::error::{map_db_error, map_foreign_key_violation};

const SENDER_FK: &str = "chat_messages_sender_fk";
const RECEIVER_FK: &str = "chat_messages_receiver_fk";

/// Name the participant whose row a foreign key violation points at
fn missing_user(message: &ChatMessage, constraint: Option<&str>) -> DomainError {
    match constraint {
        Some(SENDER_FK) => DomainError::UserNotFound(message.sender_id),
        Some(RECEIVER_FK) => DomainError::UserNotFound(message.receiver_id),
        other => DomainError::DatabaseError(format!(
            "unexpected foreign key violation on chat_messages: {other:?}"
        )),
    }
}

/// PostgreSQL implementation of ChatMessageRepository
#[derive(Clone)]
pub struct PgChatMessageRepository {
    pool: PgPool,
}

impl PgChatMessageRepository {
    /// Create a new PgChatMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatMessageRepository for PgChatMessageRepository {
    #[instrument(skip(self, message), fields(message_id = %message.id))]
    async fn create(&self, message: &ChatMessage) -> RepoResult<ChatMessage> {
        let row = sqlx::query_as::<_, ChatMessageModel>(
            r"
            INSERT INTO chat_messages (id, sender_id, receiver_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, sender_id, receiver_id, content, created_at
            ",
        )
        .bind(message.id)
        .bind(message.sender_id)
        .bind(message.receiver_id)
        .bind(&message.content)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, |constraint| missing_user(message, constraint)))?;

        Ok(ChatMessage::from(row))
    }

    #[instrument(skip(self))]
    async fn find_conversation(&self, query: &ConversationQuery) -> RepoResult<Vec<ChatMessage>> {
        // Newest `limit` rows, flipped to oldest first below
        let rows = sqlx::query_as::<_, ChatMessageModel>(
            r"
            SELECT id, sender_id, receiver_id, content, created_at
            FROM chat_messages
            WHERE LEAST(sender_id, receiver_id) = LEAST($1::UUID, $2::UUID)
              AND GREATEST(sender_id, receiver_id) = GREATEST($1::UUID, $2::UUID)
            ORDER BY created_at DESC, id DESC
            LIMIT $3
            ",
        )
        .bind(query.user_id)
        .bind(query.other_user_id)
        .bind(query.limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().rev().map(ChatMessage::from).collect())
    }
}

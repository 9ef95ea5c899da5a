//! Chat services
//!
//! Direct messages between two users: sending and reading a conversation.

use adopt_core::entities::ChatMessage;
use adopt_core::traits::ConversationQuery;
use adopt_core::{DomainError, DomainFailure, Either, Outcome};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{ChatMessageResponse, ChatMessages, CreateChatMessageRequest};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::validation::validate_input;

/// Default number of messages returned for a conversation
pub const DEFAULT_CONVERSATION_LIMIT: i64 = 50;
/// Largest page of a conversation
pub const MAX_CONVERSATION_LIMIT: i64 = 100;

// ============================================================================
// Create message
// ============================================================================

/// Input of [`CreateUserChatMessageService::execute`]
///
/// `receiver_id` and `content` are raw client input; the sender is the
/// authenticated user.
#[derive(Debug, Clone)]
pub struct CreateUserChatMessageParams {
    pub sender_id: Uuid,
    pub receiver_id: String,
    pub content: String,
}

impl CreateUserChatMessageParams {
    pub fn new(sender_id: Uuid, request: CreateChatMessageRequest) -> Self {
        Self {
            sender_id,
            receiver_id: request.receiver_id,
            content: request.content,
        }
    }
}

/// Chat message creation service
pub struct CreateUserChatMessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CreateUserChatMessageService<'a> {
    /// Create a new CreateUserChatMessageService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Validate and persist a direct message
    ///
    /// Invalid input and unknown receivers are failures; nothing is written for them.
    #[instrument(skip(self, params), fields(sender_id = %params.sender_id))]
    pub async fn execute(
        &self,
        params: CreateUserChatMessageParams,
    ) -> ServiceResult<Outcome<ChatMessageResponse>> {
        let request = CreateChatMessageRequest {
            receiver_id: params.receiver_id,
            content: params.content,
        };
        if let Err(failure) = validate_input(&request) {
            warn!(reason = %failure, "Chat message rejected");
            return Ok(Either::failure(failure));
        }

        let Ok(receiver_id) = Uuid::parse_str(request.receiver_id.trim()) else {
            return Ok(Either::failure(DomainFailure::new(
                "receiverId: Receiver must be a valid user ID",
            )));
        };

        let message = ChatMessage::new(params.sender_id, receiver_id, request.content);

        let stored = match self.ctx.chat_message_repo().create(&message).await {
            Ok(stored) => stored,
            Err(DomainError::UserNotFound(id)) if id == receiver_id => {
                warn!(receiver_id = %id, "Chat message to unknown user");
                return Ok(Either::failure(DomainFailure::new(
                    "receiverId: Receiver does not exist",
                )));
            }
            Err(e) => return Err(e.into()),
        };

        info!(message_id = %stored.id, receiver_id = %stored.receiver_id, "Chat message created");

        Ok(Either::success(ChatMessageResponse::from(stored)))
    }
}

// ============================================================================
// Read conversation
// ============================================================================

/// Input of [`GetUserChatMessagesService::execute`]
#[derive(Debug, Clone)]
pub struct GetUserChatMessagesParams {
    pub user_id: Uuid,
    pub other_user_id: String,
    pub limit: Option<i64>,
}

/// Conversation lookup service
pub struct GetUserChatMessagesService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> GetUserChatMessagesService<'a> {
    /// Create a new GetUserChatMessagesService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Latest messages between the user and `other_user_id`, oldest first
    #[instrument(skip(self), fields(user_id = %params.user_id))]
    pub async fn execute(
        &self,
        params: GetUserChatMessagesParams,
    ) -> ServiceResult<Outcome<ChatMessages>> {
        let Ok(other_user_id) = Uuid::parse_str(params.other_user_id.trim()) else {
            return Ok(Either::failure(DomainFailure::new(
                "userId: Must be a valid user ID",
            )));
        };

        let query = ConversationQuery {
            user_id: params.user_id,
            other_user_id,
            limit: clamp_limit(params.limit),
        };

        let messages = self.ctx.chat_message_repo().find_conversation(&query).await?;

        Ok(Either::success(ChatMessages {
            messages: messages.into_iter().map(ChatMessageResponse::from).collect(),
        }))
    }
}

fn clamp_limit(limit: Option<i64>) -> i64 {
    limit
        .unwrap_or(DEFAULT_CONVERSATION_LIMIT)
        .clamp(1, MAX_CONVERSATION_LIMIT)
}

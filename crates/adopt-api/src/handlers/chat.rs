//! Chat handlers

use adopt_service::dto::{ChatMessageResponse, ChatMessages, CreateChatMessageRequest};
use adopt_service::{
    CreateUserChatMessageParams, CreateUserChatMessageService, GetUserChatMessagesParams,
    GetUserChatMessagesService,
};
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::extractors::{AuthUser, JsonBody};
use crate::response::{ApiResult, OutcomeResponse};
use crate::state::AppState;

/// Send a direct message as the authenticated user
///
/// POST /chat/messages
pub async fn create_message(
    State(state): State<AppState>,
    auth: AuthUser,
    JsonBody(request): JsonBody<CreateChatMessageRequest>,
) -> ApiResult<OutcomeResponse<ChatMessageResponse>> {
    let service = CreateUserChatMessageService::new(state.service_context());
    let outcome = service
        .execute(CreateUserChatMessageParams::new(auth.user_id, request))
        .await?;
    Ok(OutcomeResponse::created(outcome))
}

/// Conversation page size
#[derive(Debug, Default, Deserialize)]
pub struct ConversationQuery {
    pub limit: Option<i64>,
}

/// Messages exchanged with another user, oldest first
///
/// GET /chat/:user_id/messages?limit=
pub async fn get_messages(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<String>,
    Query(query): Query<ConversationQuery>,
) -> ApiResult<OutcomeResponse<ChatMessages>> {
    let service = GetUserChatMessagesService::new(state.service_context());
    let outcome = service
        .execute(GetUserChatMessagesParams {
            user_id: auth.user_id,
            other_user_id: user_id,
            limit: query.limit,
        })
        .await?;
    Ok(OutcomeResponse::ok(outcome))
}

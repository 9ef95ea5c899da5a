//! User handlers

use adopt_service::dto::{RegisterUserRequest, UserResponse};
use adopt_service::RegisterUserService;
use axum::extract::State;

use crate::extractors::JsonBody;
use crate::response::{ApiResult, OutcomeResponse};
use crate::state::AppState;

/// Register a new user
///
/// POST /users
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterUserRequest>,
) -> ApiResult<OutcomeResponse<UserResponse>> {
    let service = RegisterUserService::new(state.service_context());
    let outcome = service.execute(request).await?;
    Ok(OutcomeResponse::created(outcome))
}

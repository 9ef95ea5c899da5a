//! Authentication handlers

use adopt_service::dto::{LoginRequest, LoginResponse};
use adopt_service::AuthenticateUserService;
use axum::{extract::State, http::StatusCode};

use crate::extractors::JsonBody;
use crate::response::{ApiResult, OutcomeResponse};
use crate::state::AppState;

/// Login with email and password
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<OutcomeResponse<LoginResponse>> {
    let service = AuthenticateUserService::new(state.service_context());
    let outcome = service.execute(request).await?;
    Ok(OutcomeResponse::created(outcome).failure_status(StatusCode::UNAUTHORIZED))
}

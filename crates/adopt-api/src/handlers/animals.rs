//! Animal handlers

use adopt_service::dto::AvailableAnimals;
use adopt_service::{GetAvailableAnimalsParams, GetAvailableAnimalsService};
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::extractors::AuthUser;
use crate::response::{ApiResult, OutcomeResponse};
use crate::state::AppState;

/// Optional filters of the available-animals listing
#[derive(Debug, Default, Deserialize)]
pub struct AvailableAnimalsQuery {
    pub gender: Option<String>,
    #[serde(rename = "type")]
    pub animal_type: Option<String>,
    pub name: Option<String>,
}

/// List animals available for adoption, excluding the caller's own
///
/// GET /animals/available?gender=&type=&name=
pub async fn get_available(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<AvailableAnimalsQuery>,
) -> ApiResult<OutcomeResponse<AvailableAnimals>> {
    let service = GetAvailableAnimalsService::new(state.service_context());
    let outcome = service
        .execute(GetAvailableAnimalsParams {
            user_id: auth.user_id,
            gender: query.gender,
            animal_type: query.animal_type,
            name: query.name,
        })
        .await?;
    Ok(OutcomeResponse::ok(outcome))
}

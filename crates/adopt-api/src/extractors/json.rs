//! JSON body extractor
//!
//! Like `axum::Json`, but rejects with the API's JSON error body.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::response::ApiError;

/// JSON body extractor
///
/// Only checks that the body is well-formed JSON of the right shape. Field rules
/// are enforced by the services, which report them as domain failures.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| match e {
            JsonRejection::JsonDataError(e) => ApiError::InvalidJson(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::InvalidJson(e.body_text()),
            JsonRejection::MissingJsonContentType(e) => ApiError::InvalidJson(e.body_text()),
            JsonRejection::BytesRejection(e) => ApiError::InvalidJson(e.body_text()),
            _ => ApiError::InvalidJson("Invalid JSON body".to_string()),
        })?;

        Ok(JsonBody(value))
    }
}

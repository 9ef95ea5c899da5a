//! HTTP middleware
//!
//! Every API request gets an `x-request-id`, a tracing span, a timeout, CORS
//! headers, and a global rate limit.

use std::sync::Arc;
use std::time::Duration;

use adopt_common::{CorsConfig, RateLimitConfig};
use axum::{
    body::Body,
    http::{header::{self, HeaderName}, HeaderValue, Method, Request, StatusCode},
    Router,
};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::GlobalKeyExtractor, GovernorLayer,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, warn, Level, Span};

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Requests running longer than this get `503 Service Unavailable`
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Wrap the API routes in the middleware stack
///
/// Incoming order: rate limit, request id, trace, timeout, CORS, handler.
/// Tower applies layers outside-in, so they are added innermost first.
pub fn apply_middleware(
    router: Router<AppState>,
    rate_limit: &RateLimitConfig,
    cors: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let router = router
        .layer(cors_layer(cors, is_production))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            REQUEST_TIMEOUT,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid));

    with_rate_limit(router, rate_limit)
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Outermost layer: one bucket shared by every client
fn with_rate_limit(router: Router<AppState>, config: &RateLimitConfig) -> Router<AppState> {
    let governor = GovernorConfigBuilder::default()
        .per_second(config.requests_per_second.max(1).into())
        .burst_size(config.burst.max(1))
        .key_extractor(GlobalKeyExtractor)
        .finish();

    let Some(governor) = governor else {
        warn!(?config, "Rejected rate limit configuration; requests are not limited");
        return router;
    };

    router.layer(GovernorLayer {
        config: Arc::new(governor),
    })
}

fn cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            request_id_header(),
        ])
        .expose_headers([request_id_header()]);

    // Development without a configured list stays open
    if !is_production && config.allowed_origins.is_empty() {
        warn!("CORS: allowing any origin; set CORS_ALLOWED_ORIGINS to restrict");
        return layer.allow_origin(Any);
    }

    let origins = parse_origins(&config.allowed_origins);
    if origins.is_empty() {
        warn!("CORS: no valid origins configured, cross-origin browser requests will fail");
    } else {
        info!(count = origins.len(), "CORS: allowing configured origins");
    }
    layer.allow_origin(AllowOrigin::list(origins))
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_invalid() {
        let origins = parse_origins(&[
            "https://adopt.example".to_string(),
            String::new(),
            "bad\norigin".to_string(),
        ]);
        assert_eq!(origins, vec![HeaderValue::from_static("https://adopt.example")]);
    }
}

//! Middleware stack for the API server
//!
//! Provides logging, request ID generation, CORS, compression, timeouts and
//! per-client rate limiting.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request, StatusCode},
    Router,
};
use blog_common::{AppConfig, AppError, CorsConfig, RateLimitConfig};
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Rate limit requests per client IP.
///
/// The client is taken from `x-forwarded-for`/`x-real-ip`/`forwarded` when
/// present, else from the peer address, so the server must be run with
/// connect info.
pub fn apply_rate_limit(
    router: Router<AppState>,
    config: &RateLimitConfig,
) -> Result<Router<AppState>, AppError> {
    let invalid = || {
        AppError::Config(format!(
            "invalid rate limit: {} req/s, burst {}",
            config.requests_per_second, config.burst
        ))
    };

    // One request is replenished every `replenish_ms`
    let replenish_ms = 1000_u64
        .checked_div(u64::from(config.requests_per_second))
        .ok_or_else(invalid)?
        .max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(config.burst)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
        .ok_or_else(invalid)?;

    Ok(router.layer(GovernorLayer {
        config: Arc::new(governor_conf),
    }))
}

/// Apply the shared middleware stack
///
/// Layers run outermost first on requests:
/// RequestID -> Propagate -> Trace -> Timeout -> Compression -> CORS -> Handler
pub fn apply_middleware(router: Router<AppState>, config: &AppConfig) -> Router<AppState> {
    router
        .layer(create_cors_layer(&config.cors, config.app.env.is_production()))
        .layer(CompressionLayer::new())
        // Timeout (returns 503 Service Unavailable on timeout)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::SERVICE_UNAVAILABLE,
            Duration::from_secs(config.server.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
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
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(header::HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        .layer(SetRequestIdLayer::new(
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            MakeRequestUuid,
        ))
}

/// Create CORS layer from configuration
///
/// An empty or `*` origin list allows any origin outside production.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([
            header::HeaderName::from_static(REQUEST_ID_HEADER),
            header::HeaderName::from_static("x-ratelimit-limit"),
            header::HeaderName::from_static("x-ratelimit-remaining"),
            header::HeaderName::from_static("x-ratelimit-after"),
        ]);

    let wildcard = config.allowed_origins.iter().any(|o| o == "*");
    if !is_production && (wildcard || config.allowed_origins.is_empty()) {
        tracing::warn!(
            "CORS: Allowing any origin (development mode). \
             Configure CORS_ALLOWED_ORIGINS for production."
        );
        return base_layer.allow_origin(Any);
    }

    if config.allowed_origins.is_empty() || wildcard {
        tracing::warn!(
            "CORS: No explicit allowed origins configured in production mode. \
             Requests from browsers will be blocked."
        );
        return base_layer.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()));
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    tracing::info!("CORS: Allowing {} configured origins", origins.len());
    base_layer.allow_origin(AllowOrigin::list(origins))
}

//! Request middleware: host validation, request logging and scoped CORS

use std::time::Instant;

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use safe_config_core::logging::REQUEST_LOG_TARGET;
use tower::{Layer, ServiceExt};
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Reject requests whose host is not in the allowed-hosts list
pub async fn validate_host(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> ApiResult<Response> {
    let host = request_host(&request);
    let settings = &state.settings;

    match host {
        Some(host) if settings.allowed_hosts.is_allowed(&host, settings.debug) => {
            Ok(next.run(request).await)
        }
        other => {
            let host = other.unwrap_or_default();
            warn!("Rejected request with disallowed host {:?}", host);
            Err(ApiError::DisallowedHost(host))
        }
    }
}

fn request_host(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .or_else(|| request.uri().authority().map(|a| a.as_str().to_string()))
}

/// One short line per request on the request logger
pub async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        target: REQUEST_LOG_TARGET,
        "{} {} {} {}ms",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );

    response
}

/// Apply the CORS policy only to paths matching the CORS pattern
///
/// The pattern is matched against the path below the script prefix.
pub async fn scoped_cors(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();
    let path = match state.script_prefix.as_deref() {
        Some(prefix) => path.strip_prefix(prefix),
        None => Some(path),
    };
    if !path.is_some_and(|path| state.settings.cors.applies_to(path)) {
        return next.run(request).await;
    }

    match state.cors.layer(next).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    }
}

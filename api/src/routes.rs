//! API route definitions

use axum::{middleware, routing::get, Router};
use safe_config_core::{ConfigError, Result, Settings};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Paths served by the application itself; media may not be mounted over them
const RESERVED_PATHS: [&str; 2] = ["/health", "/api"];

/// Create the main application router
///
/// Fails when the media mount would collide with an application route.
pub fn create_router(state: AppState) -> Result<Router> {
    let settings = state.settings.clone();

    let mut app = Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Service identity
        .route("/api/v1/about/", get(handlers::about::get_about));

    if let Some(mount) = local_media_mount(&settings)? {
        app = app.nest_service(&mount, ServeDir::new(&settings.storage.media_root));
    }

    let app = match state.script_prefix.as_deref() {
        Some(prefix) => Router::new().nest(prefix, app),
        None => app,
    };

    Ok(app
        .fallback(handlers::not_found)
        // Layers
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::scoped_cors,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::validate_host,
        ))
        .layer(middleware::from_fn(crate::middleware::log_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Normalise a script name into a nest prefix; `None` for the root
pub(crate) fn script_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{}", trimmed))
    }
}

/// Local mount point for media, if `MEDIA_URL` is a path on this host
fn media_mount(media_url: &str) -> Option<String> {
    if media_url.starts_with('/') {
        script_prefix(media_url)
    } else {
        None
    }
}

fn local_media_mount(settings: &Settings) -> Result<Option<String>> {
    if !settings.storage.uses_local_filesystem() {
        return Ok(None);
    }
    let Some(mount) = media_mount(&settings.storage.media_url) else {
        return Ok(None);
    };

    match RESERVED_PATHS.iter().find(|reserved| overlaps(&mount, reserved)) {
        Some(reserved) => Err(ConfigError::InvalidValue {
            key: "MEDIA_URL".to_string(),
            message: format!("media mount {} overlaps application path {}", mount, reserved),
        }),
        None => Ok(Some(mount)),
    }
}

fn overlaps(a: &str, b: &str) -> bool {
    let under = |inner: &str, outer: &str| {
        inner
            .strip_prefix(outer)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    };
    under(a, b) || under(b, a)
}

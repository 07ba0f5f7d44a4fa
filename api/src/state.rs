//! Application state

use std::sync::Arc;

use safe_config_core::Settings;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Configuration record, loaded once at startup
    pub settings: Arc<Settings>,
    /// CORS policy for paths matching the CORS pattern
    pub cors: CorsLayer,
    /// Normalised `FORCE_SCRIPT_NAME` every route is nested under
    pub script_prefix: Option<String>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Self {
        let cors = if settings.cors.allow_all_origins {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
        };

        let script_prefix = settings
            .force_script_name
            .as_deref()
            .and_then(crate::routes::script_prefix);

        Self {
            settings,
            cors,
            script_prefix,
        }
    }
}

//! Service identity endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

pub const SERVICE_NAME: &str = "Safe Config Service";
pub const API_VERSION: &str = "v1";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub build_number: String,
    pub api_version: String,
}

/// Name, version and build number of the running service
pub async fn get_about(State(state): State<AppState>) -> Json<AboutResponse> {
    let application = &state.settings.application;

    Json(AboutResponse {
        name: SERVICE_NAME.to_string(),
        version: application.version.clone(),
        build_number: application.build_number.clone(),
        api_version: API_VERSION.to_string(),
    })
}

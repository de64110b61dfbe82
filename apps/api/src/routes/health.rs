use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub completion_model: String,
    /// `false` until an OpenRouter key is set; description generation fails meanwhile.
    pub completion_configured: bool,
}

/// GET /health
pub async fn handle_health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        completion_model: state.llm.model().to_string(),
        completion_configured: state.llm.has_api_key(),
    })
}

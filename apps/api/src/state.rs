use std::sync::Arc;

use crate::auth::tokens::TokenService;
use crate::llm_client::LlmClient;
use crate::store::{AccountStore, JobStore};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub jobs: Arc<dyn JobStore>,
    pub accounts: Arc<dyn AccountStore>,
    pub tokens: TokenService,
    /// Completion client for the description generator.
    pub llm: LlmClient,
}

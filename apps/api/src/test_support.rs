//! Router harness backed by in-memory stores.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use crate::auth::tokens::TokenService;
use crate::llm_client::{LlmClient, DEFAULT_MODEL};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::memory::{MemoryAccountStore, MemoryJobStore};

pub const TEST_SECRET: &str = "test_secret";
pub const TEST_ISSUER: &str = "jobboard-api-test";

pub struct TestApp {
    pub state: AppState,
    pub jobs: Arc<MemoryJobStore>,
    pub accounts: Arc<MemoryAccountStore>,
    router: Router,
}

impl TestApp {
    /// No completion credential; the provider URL points at a closed port.
    pub fn new() -> Self {
        Self::with_llm("http://127.0.0.1:9", None)
    }

    pub fn with_llm(base_url: &str, api_key: Option<&str>) -> Self {
        let jobs = Arc::new(MemoryJobStore::default());
        let accounts = Arc::new(MemoryAccountStore::default());
        let state = AppState {
            jobs: jobs.clone(),
            accounts: accounts.clone(),
            tokens: TokenService::new(TEST_SECRET, TEST_ISSUER, Duration::hours(1)),
            llm: LlmClient::new(api_key.map(str::to_string), base_url, DEFAULT_MODEL).unwrap(),
        };

        Self {
            router: build_router(state.clone()),
            state,
            jobs,
            accounts,
        }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn token_for(&self, account_id: i64) -> String {
        self.state.tokens.issue(account_id).unwrap()
    }

    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let body = body.map(|b| b.to_string()).unwrap_or_default();
        self.send_raw(method, uri, token, &body).await
    }

    /// Sends `body` verbatim as `application/json`; empty means no body.
    pub async fn send_raw(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: &str,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = if body.is_empty() {
            builder.body(Body::empty()).unwrap()
        } else {
            builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let response = self.router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_api::auth::tokens::TokenService;
use jobboard_api::config::Config;
use jobboard_api::db::create_pool;
use jobboard_api::llm_client::LlmClient;
use jobboard_api::routes::build_router;
use jobboard_api::state::AppState;
use jobboard_api::store::postgres::{PgAccountStore, PgJobStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Job Board API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize LLM client
    let llm = LlmClient::new(
        config.openrouter_api_key.clone(),
        config.completion_api_url.clone(),
        config.completion_model.clone(),
    )
    .context("Failed to build completion HTTP client")?;
    info!("LLM client initialized (model: {})", llm.model());
    if config.openrouter_api_key.is_none() {
        info!("OPENROUTER_API_KEY not set; description generation will fail until it is");
    }

    let tokens = TokenService::new(
        &config.jwt_secret,
        config.jwt_issuer.clone(),
        Duration::hours(config.jwt_ttl_hours),
    );

    // Build app state
    let state = AppState {
        jobs: Arc::new(PgJobStore::new(db.clone())),
        accounts: Arc::new(PgAccountStore::new(db)),
        tokens,
        llm,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // frontend is served from its own origin

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

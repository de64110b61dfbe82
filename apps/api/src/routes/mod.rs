pub mod health;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};

use crate::auth::{self, guard::require_session};
use crate::jobs::handlers;
use crate::state::AppState;

/// Route table. Public routes first; everything in `guarded` sits behind
/// the bearer-token layer, which runs before extractors and handlers.
pub fn build_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health::handle_health))
        .route("/jobs", get(handlers::handle_list_jobs))
        .route("/jobs/:id", get(handlers::handle_get_job))
        .route("/auth/register", post(auth::handlers::handle_register))
        .route("/auth/login", post(auth::handlers::handle_login));

    let guarded = Router::new()
        .route("/jobs", post(handlers::handle_create_job))
        .route(
            "/jobs/:id",
            put(handlers::handle_update_job).delete(handlers::handle_delete_job),
        )
        .route(
            "/jobs/generate-description",
            post(handlers::handle_generate_description),
        )
        .route("/auth/me", get(auth::handlers::handle_me))
        .route_layer(from_fn_with_state(state.clone(), require_session));

    public.merge(guarded).with_state(state)
}

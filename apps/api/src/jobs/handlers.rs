//! Axum route handlers for the Jobs API.

use axum::{extract::State, http::StatusCode, Extension, Json};

use crate::auth::guard::Actor;
use crate::errors::AppError;
use crate::extract::{ApiJson, ApiPath};
use crate::jobs::{description, service};
use crate::models::job::{
    CreateJobInput, GenerateDescriptionRequest, GenerateDescriptionResponse, Job, UpdateJobInput,
};
use crate::state::AppState;

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    Ok(Json(service::list_jobs(state.jobs.as_ref()).await?))
}

/// GET /jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(service::get_job(state.jobs.as_ref(), id).await?))
}

/// POST /jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    ApiJson(input): ApiJson<CreateJobInput>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let job = service::create_job(state.jobs.as_ref(), input, actor).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

/// PUT /jobs/:id
///
/// The body rejection is held back so an unknown id wins over a bad payload.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    ApiPath(id): ApiPath<i64>,
    input: Result<ApiJson<UpdateJobInput>, AppError>,
) -> Result<Json<Job>, AppError> {
    let input = input.map(|ApiJson(input)| input);
    Ok(Json(
        service::update_job(state.jobs.as_ref(), id, input, actor).await?,
    ))
}

/// DELETE /jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, AppError> {
    service::delete_job(state.jobs.as_ref(), id, actor).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /jobs/generate-description
pub async fn handle_generate_description(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<GenerateDescriptionRequest>,
) -> Result<Json<GenerateDescriptionResponse>, AppError> {
    let description =
        description::generate_description(&state.llm, request.title.as_deref()).await?;
    Ok(Json(GenerateDescriptionResponse { description }))
}

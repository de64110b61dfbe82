use tracing::info;

use crate::auth::guard::Actor;
use crate::errors::AppError;
use crate::jobs::validation::{validate_changes, validate_new_job};
use crate::models::job::{CreateJobInput, Job, UpdateJobInput};
use crate::store::JobStore;

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Job with ID {id} not found"))
}

pub async fn list_jobs(jobs: &dyn JobStore) -> Result<Vec<Job>, AppError> {
    jobs.list().await
}

pub async fn get_job(jobs: &dyn JobStore, id: i64) -> Result<Job, AppError> {
    jobs.get(id).await?.ok_or_else(|| not_found(id))
}

pub async fn create_job(
    jobs: &dyn JobStore,
    input: CreateJobInput,
    actor: Actor,
) -> Result<Job, AppError> {
    let new_job = validate_new_job(&input)?;
    let job = jobs.insert(new_job).await?;

    info!("Account {} created job {}", actor.account_id, job.id);
    Ok(job)
}

/// Existence is checked before the payload, so a missing id is always NotFound.
/// `input` carries the body as parsed; a parse failure only surfaces for a
/// job that exists.
pub async fn update_job(
    jobs: &dyn JobStore,
    id: i64,
    input: Result<UpdateJobInput, AppError>,
    actor: Actor,
) -> Result<Job, AppError> {
    if jobs.get(id).await?.is_none() {
        return Err(not_found(id));
    }

    let changes = validate_changes(&input?)?;
    // Deleted between the check and the write: still NotFound.
    let job = jobs.update(id, changes).await?.ok_or_else(|| not_found(id))?;

    info!("Account {} updated job {}", actor.account_id, job.id);
    Ok(job)
}

pub async fn delete_job(jobs: &dyn JobStore, id: i64, actor: Actor) -> Result<(), AppError> {
    if !jobs.delete(id).await? {
        return Err(not_found(id));
    }

    info!("Account {} deleted job {id}", actor.account_id);
    Ok(())
}

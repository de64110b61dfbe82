use crate::errors::AppError;
use crate::models::job::{CreateJobInput, JobChanges, NewJob, UpdateJobInput};

/// Trims a required field and rejects it if nothing is left.
fn required(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{field} should not be empty")));
    }
    Ok(value.to_string())
}

/// Blank job types are stored as null.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn validate_new_job(input: &CreateJobInput) -> Result<NewJob, AppError> {
    Ok(NewJob {
        title: required("title", &input.title)?,
        description: required("description", &input.description)?,
        location: required("location", &input.location)?,
        job_type: optional(input.job_type.as_deref()),
    })
}

/// Provided fields follow the create rules; absent fields stay `None`.
pub fn validate_changes(input: &UpdateJobInput) -> Result<JobChanges, AppError> {
    Ok(JobChanges {
        title: input
            .title
            .as_deref()
            .map(|v| required("title", v))
            .transpose()?,
        description: input
            .description
            .as_deref()
            .map(|v| required("description", v))
            .transpose()?,
        location: input
            .location
            .as_deref()
            .map(|v| required("location", v))
            .transpose()?,
        job_type: optional(input.job_type.as_deref()),
    })
}

//! Job form rules checked before a create or update leaves the client.
//!
//! Lengths count characters after trimming, matching how the server stores
//! the values.

use crate::models::job::{CreateJobInput, UpdateJobInput};

pub const MIN_TITLE_LEN: usize = 3;
pub const MIN_DESCRIPTION_LEN: usize = 10;
pub const MIN_LOCATION_LEN: usize = 2;

/// First violated rule for a new job, if any.
pub fn check_new_job(job: &CreateJobInput) -> Result<(), String> {
    check_title(&job.title)?;
    check_description(&job.description)?;
    check_location(&job.location)
}

/// Same rules as [`check_new_job`], applied only to the fields being changed.
pub fn check_changes(changes: &UpdateJobInput) -> Result<(), String> {
    if let Some(title) = &changes.title {
        check_title(title)?;
    }
    if let Some(description) = &changes.description {
        check_description(description)?;
    }
    if let Some(location) = &changes.location {
        check_location(location)?;
    }
    Ok(())
}

fn check_title(title: &str) -> Result<(), String> {
    at_least(title, MIN_TITLE_LEN, "Title")
}

fn check_description(description: &str) -> Result<(), String> {
    at_least(description, MIN_DESCRIPTION_LEN, "Description")
}

fn check_location(location: &str) -> Result<(), String> {
    at_least(location, MIN_LOCATION_LEN, "Location")
}

fn at_least(value: &str, min: usize, field: &str) -> Result<(), String> {
    if value.trim().chars().count() < min {
        return Err(format!("{field} must be at least {min} characters."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateJobInput {
        CreateJobInput {
            title: "Dev".to_string(),
            description: "Ten chars!".to_string(),
            location: "NY".to_string(),
            job_type: None,
        }
    }

    #[test]
    fn test_minimum_lengths_pass() {
        assert!(check_new_job(&valid()).is_ok());
    }

    #[test]
    fn test_each_short_field_is_named() {
        let mut job = valid();
        job.title = "QA".to_string();
        assert_eq!(
            check_new_job(&job).unwrap_err(),
            "Title must be at least 3 characters."
        );

        let mut job = valid();
        job.description = "Too short".to_string();
        assert!(check_new_job(&job).unwrap_err().starts_with("Description"));

        let mut job = valid();
        job.location = " X ".to_string();
        assert!(check_new_job(&job).unwrap_err().starts_with("Location"));
    }

    #[test]
    fn test_changes_only_check_provided_fields() {
        assert!(check_changes(&UpdateJobInput::default()).is_ok());
        assert!(check_changes(&UpdateJobInput {
            location: Some("Berlin".to_string()),
            ..Default::default()
        })
        .is_ok());
        assert!(check_changes(&UpdateJobInput {
            description: Some("short".to_string()),
            ..Default::default()
        })
        .is_err());
    }
}

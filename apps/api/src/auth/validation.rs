use crate::errors::AppError;
use crate::models::account::RegisterRequest;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Registration input after validation. Email is trimmed and lower-cased.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRegistration {
    pub email: String,
    pub password: String,
    pub name: String,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Checks for `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

pub fn validate_registration(req: &RegisterRequest) -> Result<ValidRegistration, AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() {
        return Err(AppError::Validation("email should not be empty".to_string()));
    }
    if !is_valid_email(&email) {
        return Err(AppError::Validation("email must be an email".to_string()));
    }
    if req.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AppError::Validation(format!(
            "password must be longer than or equal to {MIN_PASSWORD_LEN} characters"
        )));
    }
    let name = req.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name should not be empty".to_string()));
    }

    Ok(ValidRegistration {
        email,
        password: req.password.clone(),
        name: name.to_string(),
    })
}

use tracing::{info, warn};

use crate::auth::password::{hash_password, verify_password, DUMMY_HASH};
use crate::auth::tokens::TokenService;
use crate::auth::validation::{normalize_email, validate_registration};
use crate::errors::AppError;
use crate::models::account::{Account, AuthResponse, LoginRequest, NewAccount, RegisterRequest};
use crate::store::AccountStore;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Creates an account and opens a session for it.
pub async fn register(
    accounts: &dyn AccountStore,
    tokens: &TokenService,
    req: RegisterRequest,
) -> Result<AuthResponse, AppError> {
    let valid = validate_registration(&req)?;

    if accounts.find_by_email(&valid.email).await?.is_some() {
        return Err(AppError::Conflict(
            "Email is already registered".to_string(),
        ));
    }

    let password_hash = hash_password(valid.password).await?;
    let record = accounts
        .insert(NewAccount {
            email: valid.email,
            name: valid.name,
            password_hash,
        })
        .await?;

    info!("Registered account {}", record.id);
    issue_session(tokens, record.into())
}

/// Unknown email and wrong password fail identically.
pub async fn login(
    accounts: &dyn AccountStore,
    tokens: &TokenService,
    req: LoginRequest,
) -> Result<AuthResponse, AppError> {
    let email = normalize_email(&req.email);
    if email.is_empty() || req.password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let record = accounts.find_by_email(&email).await?;

    // Unknown emails still pay for one Argon2 verification.
    let stored_hash = record
        .as_ref()
        .map_or(DUMMY_HASH, |r| r.password_hash.as_str())
        .to_string();
    let matches = verify_password(req.password, stored_hash).await?;

    match record {
        Some(record) if matches => {
            info!("Account {} logged in", record.id);
            issue_session(tokens, record.into())
        }
        Some(record) => {
            warn!("Login rejected for account {}: password mismatch", record.id);
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
        None => {
            warn!("Login rejected: no account for submitted email");
            Err(AppError::Unauthorized(INVALID_CREDENTIALS.to_string()))
        }
    }
}

/// Resolves the account behind a verified token.
pub async fn current_account(
    accounts: &dyn AccountStore,
    account_id: i64,
) -> Result<Account, AppError> {
    accounts
        .get(account_id)
        .await?
        .map(Account::from)
        .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))
}

fn issue_session(tokens: &TokenService, user: Account) -> Result<AuthResponse, AppError> {
    let token = tokens
        .issue(user.id)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("token signing failed: {e}")))?;
    Ok(AuthResponse { user, token })
}

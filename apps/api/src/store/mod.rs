//! Storage seams for jobs and accounts.
//!
//! `AppState` carries `Arc<dyn JobStore>` and `Arc<dyn AccountStore>`. The
//! server wires the PostgreSQL implementations; tests use the in-memory ones.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::account::{AccountRecord, NewAccount};
use crate::models::job::{Job, JobChanges, NewJob};

#[cfg(test)]
pub mod memory;
pub mod postgres;

#[async_trait]
pub trait JobStore: Send + Sync {
    /// All jobs, ordered by id ascending.
    async fn list(&self) -> Result<Vec<Job>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Job>, AppError>;

    async fn insert(&self, job: NewJob) -> Result<Job, AppError>;

    /// Merges the provided fields and bumps `updated_at`. `None` if the id is absent.
    async fn update(&self, id: i64, changes: JobChanges) -> Result<Option<Job>, AppError>;

    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<AccountRecord>, AppError>;

    /// Fails with `AppError::Conflict` if the email is already taken.
    async fn insert(&self, account: NewAccount) -> Result<AccountRecord, AppError>;
}

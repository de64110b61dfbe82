use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::account::{AccountRecord, NewAccount};
use crate::models::job::{Job, JobChanges, NewJob};
use crate::store::{AccountStore, JobStore};

const JOB_COLUMNS: &str = "id, title, description, location, job_type, created_at, updated_at";
const ACCOUNT_COLUMNS: &str = "id, email, name, password_hash, created_at";

#[derive(Clone)]
pub struct PgJobStore {
    pool: PgPool,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for PgJobStore {
    async fn list(&self) -> Result<Vec<Job>, AppError> {
        let jobs = sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(jobs)
    }

    async fn get(&self, id: i64) -> Result<Option<Job>, AppError> {
        let job =
            sqlx::query_as::<_, Job>(&format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(job)
    }

    async fn insert(&self, job: NewJob) -> Result<Job, AppError> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            INSERT INTO jobs (title, description, location, job_type)
            VALUES ($1, $2, $3, $4)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(&job.title)
        .bind(&job.description)
        .bind(&job.location)
        .bind(&job.job_type)
        .fetch_one(&self.pool)
        .await?;

        debug!("Inserted job row {}", row.id);
        Ok(row)
    }

    async fn update(&self, id: i64, changes: JobChanges) -> Result<Option<Job>, AppError> {
        let row = sqlx::query_as::<_, Job>(&format!(
            r#"
            UPDATE jobs SET
                title       = COALESCE($2, title),
                description = COALESCE($3, description),
                location    = COALESCE($4, location),
                job_type    = COALESCE($5, job_type),
                updated_at  = GREATEST(NOW(), created_at)
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(&changes.location)
        .bind(&changes.job_type)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AppError> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<AccountRecord>, AppError> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(record)
    }

    async fn insert(&self, account: NewAccount) -> Result<AccountRecord, AppError> {
        let result = sqlx::query_as::<_, AccountRecord>(&format!(
            r#"
            INSERT INTO accounts (email, name, password_hash)
            VALUES ($1, $2, $3)
            RETURNING {ACCOUNT_COLUMNS}
            "#
        ))
        .bind(&account.email)
        .bind(&account.name)
        .bind(&account.password_hash)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => Ok(record),
            // Lost a race against a concurrent registration with the same email.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => Err(AppError::Conflict(
                "Email is already registered".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

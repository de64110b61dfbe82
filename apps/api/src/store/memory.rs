use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::errors::AppError;
use crate::models::account::{AccountRecord, NewAccount};
use crate::models::job::{Job, JobChanges, NewJob};
use crate::store::{AccountStore, JobStore};

/// In-memory job table with monotonically increasing ids.
#[derive(Default)]
pub struct MemoryJobStore {
    inner: RwLock<(i64, BTreeMap<i64, Job>)>,
}

impl MemoryJobStore {
    pub async fn len(&self) -> usize {
        self.inner.read().await.1.len()
    }
}

#[async_trait]
impl JobStore for MemoryJobStore {
    async fn list(&self) -> Result<Vec<Job>, AppError> {
        Ok(self.inner.read().await.1.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Job>, AppError> {
        Ok(self.inner.read().await.1.get(&id).cloned())
    }

    async fn insert(&self, job: NewJob) -> Result<Job, AppError> {
        let mut guard = self.inner.write().await;
        let (last_id, rows) = &mut *guard;
        *last_id += 1;

        let now = Utc::now();
        let row = Job {
            id: *last_id,
            title: job.title,
            description: job.description,
            location: job.location,
            job_type: job.job_type,
            created_at: now,
            updated_at: now,
        };
        rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: i64, changes: JobChanges) -> Result<Option<Job>, AppError> {
        let mut guard = self.inner.write().await;
        let Some(row) = guard.1.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title {
            row.title = title;
        }
        if let Some(description) = changes.description {
            row.description = description;
        }
        if let Some(location) = changes.location {
            row.location = location;
        }
        if let Some(job_type) = changes.job_type {
            row.job_type = Some(job_type);
        }
        row.updated_at = Utc::now().max(row.created_at);

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.1.remove(&id).is_some())
    }
}

/// In-memory account table keyed by id, with email uniqueness.
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: RwLock<(i64, BTreeMap<i64, AccountRecord>)>,
}

impl MemoryAccountStore {
    pub async fn len(&self) -> usize {
        self.inner.read().await.1.len()
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>, AppError> {
        Ok(self
            .inner
            .read()
            .await
            .1
            .values()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn get(&self, id: i64) -> Result<Option<AccountRecord>, AppError> {
        Ok(self.inner.read().await.1.get(&id).cloned())
    }

    async fn insert(&self, account: NewAccount) -> Result<AccountRecord, AppError> {
        let mut guard = self.inner.write().await;
        let (last_id, rows) = &mut *guard;
        if rows.values().any(|a| a.email == account.email) {
            return Err(AppError::Conflict(
                "Email is already registered".to_string(),
            ));
        }

        *last_id += 1;
        let record = AccountRecord {
            id: *last_id,
            email: account.email,
            name: account.name,
            password_hash: account.password_hash,
            created_at: Utc::now(),
        };
        rows.insert(record.id, record.clone());
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_job(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            description: "Build things".to_string(),
            location: "Remote".to_string(),
            job_type: None,
        }
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let store = MemoryJobStore::default();
        let first = store.insert(new_job("A")).await.unwrap();
        assert!(store.delete(first.id).await.unwrap());
        let second = store.insert(new_job("B")).await.unwrap();
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn test_update_keeps_absent_fields() {
        let store = MemoryJobStore::default();
        let job = store.insert(new_job("A")).await.unwrap();
        let updated = store
            .update(
                job.id,
                JobChanges {
                    location: Some("Berlin".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.title, "A");
        assert_eq!(updated.location, "Berlin");
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let store = MemoryAccountStore::default();
        let account = NewAccount {
            email: "a@example.com".to_string(),
            name: "A".to_string(),
            password_hash: "hash".to_string(),
        };
        store.insert(account.clone()).await.unwrap();
        let err = store.insert(account).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.len().await, 1);
    }
}

use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::repositories::error::RepositoryResult;
use crate::domain::repositories::{RepositoryError, UserRecord, UserRepository};
use crate::domain::user::{Email, User, UserUpdate};
use crate::infrastructure::json_store::JsonFileStore;

/// JSON-file implementation of UserRepository
///
/// Users live in a single array in `users.json`; uniqueness of `user_id` and
/// email (case-insensitive) is checked inside the store's write cycle.
pub struct JsonUserRepository {
    store: JsonFileStore<UserRecord>,
}

impl JsonUserRepository {
    /// Creates a repository backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl UserRepository for JsonUserRepository {
    async fn create(&self, record: UserRecord) -> RepositoryResult<User> {
        let user = self
            .store
            .update(|records| -> RepositoryResult<_> {
                if records.iter().any(|r| r.user.user_id == record.user.user_id) {
                    return Err(RepositoryError::conflict(format!(
                        "User already exists: {}",
                        record.user.user_id
                    )));
                }
                if records.iter().any(|r| r.user.email.matches(&record.user.email)) {
                    return Err(RepositoryError::conflict("Email already registered"));
                }
                let user = record.user.clone();
                records.push(record);
                Ok(user)
            })
            .await?;

        tracing::info!(user_id = %user.user_id, "User created");
        Ok(user)
    }

    async fn list(&self) -> RepositoryResult<Vec<User>> {
        let records = self.store.load().await?;
        Ok(records.into_iter().map(|r| r.user).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>> {
        let records = self.store.load().await?;
        Ok(records
            .into_iter()
            .find(|r| r.user.user_id == id)
            .map(|r| r.user))
    }

    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<UserRecord>> {
        let records = self.store.load().await?;
        Ok(records.into_iter().find(|r| r.user.email.matches(email)))
    }

    async fn update(&self, id: Uuid, patch: UserUpdate) -> RepositoryResult<User> {
        let updated = self
            .store
            .update(|records| -> RepositoryResult<_> {
                if let Some(email) = &patch.email {
                    if records
                        .iter()
                        .any(|r| r.user.user_id != id && r.user.email.matches(email))
                    {
                        return Err(RepositoryError::conflict("Email already registered"));
                    }
                }
                let record = records
                    .iter_mut()
                    .find(|r| r.user.user_id == id)
                    .ok_or_else(|| RepositoryError::not_found("User", id))?;
                patch.apply(&mut record.user);
                Ok(record.user.clone())
            })
            .await?;

        tracing::info!(user_id = %updated.user_id, "User updated");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<User> {
        let removed = self
            .store
            .update(|records| -> RepositoryResult<_> {
                let index = records
                    .iter()
                    .position(|r| r.user.user_id == id)
                    .ok_or_else(|| RepositoryError::not_found("User", id))?;
                Ok(records.remove(index).user)
            })
            .await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(removed)
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::domain::user::{Email, User, UserUpdate};

/// User data as persisted
///
/// The public profile plus the password hash, stored side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    pub password_hash: String,
}

/// Repository trait for users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user; fails with `Conflict` on a duplicate id or email
    async fn create(&self, record: UserRecord) -> RepositoryResult<User>;

    /// All users in insertion order
    async fn list(&self) -> RepositoryResult<Vec<User>>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<User>>;

    /// Find a stored user, hash included, by email address
    async fn find_by_email(&self, email: &Email) -> RepositoryResult<Option<UserRecord>>;

    /// Apply a partial update to an existing user, keeping its password hash
    ///
    /// The lookup, email uniqueness check and write happen as one step.
    async fn update(&self, id: Uuid, patch: UserUpdate) -> RepositoryResult<User>;

    /// Remove a user and return what was removed
    async fn delete(&self, id: Uuid) -> RepositoryResult<User>;
}

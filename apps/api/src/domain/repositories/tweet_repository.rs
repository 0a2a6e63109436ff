use async_trait::async_trait;
use uuid::Uuid;

use super::error::RepositoryResult;
use crate::domain::tweet::Tweet;

/// Repository trait for tweets
#[async_trait]
pub trait TweetRepository: Send + Sync {
    /// Store a new tweet; fails with `Conflict` on a duplicate id
    async fn create(&self, tweet: Tweet) -> RepositoryResult<Tweet>;

    /// All tweets in insertion order
    async fn list(&self) -> RepositoryResult<Vec<Tweet>>;

    /// Find a tweet by ID
    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Tweet>>;

    /// Replace the content of an existing tweet and stamp `updated_at`
    async fn edit(&self, id: Uuid, content: String) -> RepositoryResult<Tweet>;

    /// Remove a tweet and return what was removed
    async fn delete(&self, id: Uuid) -> RepositoryResult<Tweet>;
}

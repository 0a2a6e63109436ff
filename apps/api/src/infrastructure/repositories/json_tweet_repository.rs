use async_trait::async_trait;
use std::path::PathBuf;
use uuid::Uuid;

use crate::domain::repositories::error::RepositoryResult;
use crate::domain::repositories::{RepositoryError, TweetRepository};
use crate::domain::tweet::Tweet;
use crate::infrastructure::json_store::JsonFileStore;

/// JSON-file implementation of TweetRepository
pub struct JsonTweetRepository {
    store: JsonFileStore<Tweet>,
}

impl JsonTweetRepository {
    /// Creates a repository backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonFileStore::new(path),
        }
    }
}

#[async_trait]
impl TweetRepository for JsonTweetRepository {
    async fn create(&self, tweet: Tweet) -> RepositoryResult<Tweet> {
        let created = self
            .store
            .update(|tweets| -> RepositoryResult<_> {
                if tweets.iter().any(|t| t.tweet_id == tweet.tweet_id) {
                    return Err(RepositoryError::conflict(format!(
                        "Tweet already exists: {}",
                        tweet.tweet_id
                    )));
                }
                tweets.push(tweet.clone());
                Ok(tweet)
            })
            .await?;

        tracing::info!(tweet_id = %created.tweet_id, user_id = %created.by.user_id, "Tweet posted");
        Ok(created)
    }

    async fn list(&self) -> RepositoryResult<Vec<Tweet>> {
        Ok(self.store.load().await?)
    }

    async fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Tweet>> {
        let tweets = self.store.load().await?;
        Ok(tweets.into_iter().find(|t| t.tweet_id == id))
    }

    async fn edit(&self, id: Uuid, content: String) -> RepositoryResult<Tweet> {
        let edited = self
            .store
            .update(|tweets| -> RepositoryResult<_> {
                let tweet = tweets
                    .iter_mut()
                    .find(|t| t.tweet_id == id)
                    .ok_or_else(|| RepositoryError::not_found("Tweet", id))?;
                tweet.edit(content);
                Ok(tweet.clone())
            })
            .await?;

        tracing::info!(tweet_id = %id, "Tweet updated");
        Ok(edited)
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<Tweet> {
        let removed = self
            .store
            .update(|tweets| -> RepositoryResult<_> {
                let index = tweets
                    .iter()
                    .position(|t| t.tweet_id == id)
                    .ok_or_else(|| RepositoryError::not_found("Tweet", id))?;
                Ok(tweets.remove(index))
            })
            .await?;

        tracing::info!(tweet_id = %id, "Tweet deleted");
        Ok(removed)
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::user::User;
use crate::domain::validation::{Validate, ValidationErrors};

pub const CONTENT_MIN: usize = 1;
pub const CONTENT_MAX: usize = 256;

/// A short post written by a user
///
/// # Invariants
/// - `content` is 1-256 characters
/// - `by` is a valid [`User`]
/// - `updated_at`, when set, is never earlier than `created_at`
///
/// `created_at` defaults to the time the payload is decoded, so each request
/// gets its own timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub tweet_id: Uuid,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    pub by: User,
}

impl Tweet {
    /// Replaces the content and stamps `updated_at`
    pub fn edit(&mut self, content: String) {
        let now = Utc::now().max(self.created_at);
        self.content = content;
        self.updated_at = Some(now);
    }
}

impl Validate for Tweet {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("content", &self.content, CONTENT_MIN, Some(CONTENT_MAX));
        if let Some(updated_at) = self.updated_at {
            if updated_at < self.created_at {
                errors.add("updated_at", "must not be earlier than created_at");
            }
        }
        errors.check_nested("by", &self.by);
        errors.into_result()
    }
}

/// Payload for editing a tweet
#[derive(Debug, Clone, Deserialize)]
pub struct TweetUpdate {
    pub content: String,
}

impl Validate for TweetUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("content", &self.content, CONTENT_MIN, Some(CONTENT_MAX));
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::Email;
    use chrono::Duration;
    use serde_json::json;

    fn author() -> User {
        User {
            user_id: Uuid::new_v4(),
            email: Email::new("author@example.com").unwrap(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            birth_date: None,
        }
    }

    fn tweet(content: &str) -> Tweet {
        Tweet {
            tweet_id: Uuid::new_v4(),
            content: content.to_string(),
            created_at: Utc::now(),
            updated_at: None,
            by: author(),
        }
    }

    #[test]
    fn valid_tweet() {
        assert!(tweet("hello").validate().is_ok());
    }

    #[test]
    fn empty_content_fails() {
        let errors = tweet("").validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "content");
    }

    #[test]
    fn content_at_limit_is_valid() {
        assert!(tweet(&"a".repeat(256)).validate().is_ok());
        assert!(tweet(&"a".repeat(257)).validate().is_err());
    }

    #[test]
    fn invalid_author_is_reported_under_by() {
        let mut t = tweet("hello");
        t.by.first_name = String::new();

        let errors = t.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "by.first_name");
    }

    #[test]
    fn updated_before_created_fails() {
        let mut t = tweet("hello");
        t.updated_at = Some(t.created_at - Duration::seconds(5));
        assert!(t.validate().is_err());
    }

    #[test]
    fn created_at_defaults_to_now() {
        let before = Utc::now();
        let decoded: Tweet = serde_json::from_value(json!({
            "tweet_id": Uuid::new_v4(),
            "content": "hi",
            "by": author(),
        }))
        .unwrap();

        assert!(decoded.created_at >= before);
        assert!(decoded.updated_at.is_none());
    }

    #[test]
    fn edit_stamps_updated_at() {
        let mut t = tweet("first");
        t.edit("second".to_string());

        assert_eq!(t.content, "second");
        assert!(t.updated_at.unwrap() >= t.created_at);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn update_payload_limits() {
        assert!(TweetUpdate { content: "ok".to_string() }.validate().is_ok());
        assert!(TweetUpdate { content: String::new() }.validate().is_err());
    }
}

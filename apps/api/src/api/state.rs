use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::config::HeaderSecrets;
use crate::domain::repositories::{TweetRepository, UserRepository};

/// State for the dependency-injection demo
#[derive(Clone, Default)]
pub struct HelloState {
    pub secrets: HeaderSecrets,
}

impl FromRef<HelloState> for HeaderSecrets {
    fn from_ref(state: &HelloState) -> Self {
        state.secrets.clone()
    }
}

/// State for the users and tweets demo
#[derive(Clone)]
pub struct TwitterState {
    pub users: Arc<dyn UserRepository>,
    pub tweets: Arc<dyn TweetRepository>,
    pub hasher: PasswordHasher,
}

impl TwitterState {
    pub fn new(
        users: Arc<dyn UserRepository>,
        tweets: Arc<dyn TweetRepository>,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            users,
            tweets,
            hasher,
        }
    }
}

// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces over JSON files

pub mod json_tweet_repository;
pub mod json_user_repository;

pub use json_tweet_repository::JsonTweetRepository;
pub use json_user_repository::JsonUserRepository;

// Repository interfaces (ports)
// Implementations live in the infrastructure layer

pub mod error;
pub mod tweet_repository;
pub mod user_repository;

pub use error::RepositoryError;
pub use tweet_repository::TweetRepository;
pub use user_repository::{UserRecord, UserRepository};

// Infrastructure layer module
// Contains the flat-file storage adapters
// Follows Hexagonal Architecture

pub mod json_store;
pub mod repositories;

pub use json_store::{JsonFileStore, StorageError};

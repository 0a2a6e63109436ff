// Credential handling for the user endpoints

pub mod password;

pub use password::{PasswordError, PasswordHasher};

// Password hashing utilities
// Uses bcrypt; plaintext passwords are never persisted

use thiserror::Error;

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordError(#[from] bcrypt::BcryptError);

/// bcrypt hasher with a fixed work factor
///
/// # Example
/// ```
/// use tutorial_api::auth::PasswordHasher;
/// use tutorial_api::config::MIN_BCRYPT_COST;
///
/// let hasher = PasswordHasher::new(MIN_BCRYPT_COST);
/// let hash = hasher.hash("my_password").expect("valid hash");
/// assert!(hasher.verify("my_password", &hash).unwrap());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Verifies a password against a bcrypt hash
    ///
    /// A malformed hash is an error, not a mismatch.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        Ok(bcrypt::verify(password, hash)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_BCRYPT_COST;

    fn hasher() -> PasswordHasher {
        PasswordHasher::new(MIN_BCRYPT_COST)
    }

    #[test]
    fn hash_and_verify_password() {
        let hash = hasher().hash("test_password_123").expect("valid hash");
        assert!(hasher().verify("test_password_123", &hash).unwrap());
    }

    #[test]
    fn verify_wrong_password() {
        let hash = hasher().hash("test_password_123").expect("valid hash");
        assert!(!hasher().verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn hash_is_salted() {
        let hash1 = hasher().hash("test_password_123").unwrap();
        let hash2 = hasher().hash("test_password_123").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn hash_never_contains_plaintext() {
        let hash = hasher().hash("test_password_123").unwrap();
        assert!(!hash.contains("test_password_123"));
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(hasher().verify("anything", "not-a-bcrypt-hash").is_err());
    }

    #[test]
    fn default_cost_matches_bcrypt() {
        assert_eq!(PasswordHasher::default().cost(), bcrypt::DEFAULT_COST);
    }
}

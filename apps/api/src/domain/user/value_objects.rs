use serde::{Deserialize, Serialize};
use std::fmt;

/// Email value object representing a syntactically valid address
///
/// # Invariants
/// - Exactly one '@' with a non-empty local part
/// - Domain contains a '.' that is neither first nor last
/// - No whitespace anywhere
/// - Is immutable after construction
///
/// Deserialization goes through [`Email::new`], so an invalid address is
/// rejected while the request body is decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Creates a new Email value object
    ///
    /// # Example
    /// ```
    /// use tutorial_api::domain::user::value_objects::Email;
    ///
    /// let email = Email::new("david@example.com").expect("valid email");
    /// assert_eq!(email.as_str(), "david@example.com");
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, String> {
        let email = email.into();
        if Self::is_valid(&email) {
            Ok(Email(email))
        } else {
            Err(format!("value is not a valid email address: {}", email))
        }
    }

    fn is_valid(email: &str) -> bool {
        if email.chars().any(char::is_whitespace) {
            return false;
        }
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        if local.is_empty() || domain.contains('@') {
            return false;
        }
        match domain.rfind('.') {
            Some(dot) => dot > 0 && dot < domain.len() - 1 && !domain.starts_with('.'),
            None => false,
        }
    }

    /// Returns the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison used for uniqueness checks
    pub fn matches(&self, other: &Email) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl TryFrom<String> for Email {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

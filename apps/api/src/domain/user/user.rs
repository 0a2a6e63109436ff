use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::Email;
use crate::domain::validation::{Validate, ValidationErrors};

pub const NAME_MIN: usize = 1;
pub const NAME_MAX: usize = 50;
pub const PASSWORD_MIN: usize = 8;
pub const PASSWORD_MAX: usize = 64;

/// Public user profile
///
/// This is what every user endpoint returns; it never carries a password.
///
/// # Invariants
/// - `first_name` and `last_name` are 1-50 characters
/// - `email` is a valid address (enforced by [`Email`])
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: Uuid,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl Validate for User {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("first_name", &self.first_name, NAME_MIN, Some(NAME_MAX));
        errors.check_length("last_name", &self.last_name, NAME_MIN, Some(NAME_MAX));
        errors.into_result()
    }
}

/// Signup payload: a full profile plus the plaintext password
#[derive(Debug, Clone, Deserialize)]
pub struct UserRegister {
    #[serde(flatten)]
    pub user: User,
    pub password: String,
}

impl Validate for UserRegister {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.user.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        errors.check_length("password", &self.password, PASSWORD_MIN, Some(PASSWORD_MAX));
        errors.into_result()
    }
}

/// Login payload
#[derive(Debug, Clone, Deserialize)]
pub struct UserLogin {
    pub email: Email,
    pub password: String,
}

impl Validate for UserLogin {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("password", &self.password, PASSWORD_MIN, Some(PASSWORD_MAX));
        errors.into_result()
    }
}

/// Partial profile update; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub email: Option<Email>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
    }

    /// Applies the set fields onto `user`
    pub fn apply(self, user: &mut User) {
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = Some(birth_date);
        }
    }
}

impl Validate for UserUpdate {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.is_empty() {
            errors.add("body", "at least one field must be provided");
        }
        if let Some(first_name) = &self.first_name {
            errors.check_length("first_name", first_name, NAME_MIN, Some(NAME_MAX));
        }
        if let Some(last_name) = &self.last_name {
            errors.check_length("last_name", last_name, NAME_MIN, Some(NAME_MAX));
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user() -> User {
        User {
            user_id: Uuid::new_v4(),
            email: Email::new("david@example.com").unwrap(),
            first_name: "David".to_string(),
            last_name: "Casas".to_string(),
            birth_date: None,
        }
    }

    #[test]
    fn valid_user() {
        assert!(user().validate().is_ok());
    }

    #[test]
    fn user_with_empty_and_long_names_reports_both() {
        let mut u = user();
        u.first_name = String::new();
        u.last_name = "x".repeat(51);

        let errors = u.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "last_name"]);
    }

    #[test]
    fn birth_date_is_optional_on_decode() {
        let decoded: User = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "email": "david@example.com",
            "first_name": "David",
            "last_name": "Casas"
        }))
        .unwrap();
        assert_eq!(decoded.birth_date, None);
    }

    #[test]
    fn register_flattens_profile_and_password() {
        let decoded: UserRegister = serde_json::from_value(json!({
            "user_id": Uuid::new_v4(),
            "email": "david@example.com",
            "first_name": "David",
            "last_name": "Casas",
            "birth_date": "1996-05-04",
            "password": "supersecret"
        }))
        .unwrap();

        assert_eq!(decoded.user.first_name, "David");
        assert_eq!(
            decoded.user.birth_date,
            NaiveDate::from_ymd_opt(1996, 5, 4)
        );
        assert!(decoded.validate().is_ok());
    }

    #[test]
    fn register_with_short_password_fails() {
        let register = UserRegister {
            user: user(),
            password: "short".to_string(),
        };
        let errors = register.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "password");
    }

    #[test]
    fn register_with_long_password_fails() {
        let register = UserRegister {
            user: user(),
            password: "p".repeat(65),
        };
        assert!(register.validate().is_err());
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(UserUpdate::default().validate().is_err());
    }

    #[test]
    fn update_applies_only_set_fields() {
        let mut u = user();
        let update = UserUpdate {
            first_name: Some("Dave".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_ok());

        update.apply(&mut u);
        assert_eq!(u.first_name, "Dave");
        assert_eq!(u.last_name, "Casas");
    }

    #[test]
    fn user_serializes_missing_birth_date_as_null() {
        let value = serde_json::to_value(user()).unwrap();
        assert!(value["birth_date"].is_null());
        assert!(value.get("password").is_none());
    }
}

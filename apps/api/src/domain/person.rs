use serde::{Deserialize, Serialize};

use crate::domain::validation::{Validate, ValidationErrors};

pub const NAME_MIN: usize = 1;
pub const NAME_MAX: usize = 50;
pub const AGE_MAX: i64 = 115;
pub const PASSWORD_MIN: usize = 8;
pub const PLACE_MIN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairColor {
    White,
    Brown,
    Black,
    Blonde,
    Red,
}

impl std::fmt::Display for HairColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HairColor::White => write!(f, "white"),
            HairColor::Brown => write!(f, "brown"),
            HairColor::Black => write!(f, "black"),
            HairColor::Blonde => write!(f, "blonde"),
            HairColor::Red => write!(f, "red"),
        }
    }
}

/// Fields shared by every person payload
///
/// # Invariants
/// - `first_name` and `last_name` are 1-50 characters
/// - `age` is in `1..=115`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonBase {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    #[serde(default)]
    pub hair_color: Option<HairColor>,
    #[serde(default)]
    pub is_married: Option<bool>,
}

impl Validate for PersonBase {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("first_name", &self.first_name, NAME_MIN, Some(NAME_MAX));
        errors.check_length("last_name", &self.last_name, NAME_MIN, Some(NAME_MAX));
        if self.age <= 0 {
            errors.add("age", "must be greater than 0");
        } else if self.age > AGE_MAX {
            errors.add("age", format!("must be less than or equal to {}", AGE_MAX));
        }
        errors.into_result()
    }
}

/// Incoming person, including the password
#[derive(Debug, Clone, Deserialize)]
pub struct Person {
    #[serde(flatten)]
    pub base: PersonBase,
    pub password: String,
}

impl Validate for Person {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = match self.base.validate() {
            Ok(()) => ValidationErrors::new(),
            Err(errors) => errors,
        };
        errors.check_length("password", &self.password, PASSWORD_MIN, None);
        errors.into_result()
    }
}

/// Outgoing person; the password is dropped by construction
pub type PersonOut = PersonBase;

impl From<Person> for PersonOut {
    fn from(person: Person) -> Self {
        person.base
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Validate for Location {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_length("city", &self.city, PLACE_MIN, None);
        errors.check_length("state", &self.state, PLACE_MIN, None);
        errors.check_length("country", &self.country, PLACE_MIN, None);
        errors.into_result()
    }
}

/// Person and location sent together, each embedded under its own key
#[derive(Debug, Clone, Deserialize)]
pub struct PersonWithLocation {
    pub person: Person,
    pub location: Location,
}

impl Validate for PersonWithLocation {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check_nested("person", &self.person);
        errors.check_nested("location", &self.location);
        errors.into_result()
    }
}

/// A person merged with where they live
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocatedPerson {
    #[serde(flatten)]
    pub person: PersonOut,
    #[serde(flatten)]
    pub location: Location,
}

impl From<PersonWithLocation> for LocatedPerson {
    fn from(payload: PersonWithLocation) -> Self {
        Self {
            person: payload.person.into(),
            location: payload.location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> PersonBase {
        PersonBase {
            first_name: "David".to_string(),
            last_name: "Casas".to_string(),
            age: 26,
            hair_color: Some(HairColor::Black),
            is_married: Some(false),
        }
    }

    fn location() -> Location {
        Location {
            city: "Bogota".to_string(),
            state: "Cundinamarca".to_string(),
            country: "Colombia".to_string(),
        }
    }

    #[test]
    fn valid_person_base() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn age_zero_fails() {
        let mut p = base();
        p.age = 0;
        let errors = p.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "age");
    }

    #[test]
    fn age_boundary() {
        let mut p = base();
        p.age = 115;
        assert!(p.validate().is_ok());
        p.age = 116;
        assert!(p.validate().is_err());
    }

    #[test]
    fn hair_color_decodes_lowercase() {
        let color: HairColor = serde_json::from_str("\"blonde\"").unwrap();
        assert_eq!(color, HairColor::Blonde);
        assert!(serde_json::from_str::<HairColor>("\"green\"").is_err());
    }

    #[test]
    fn person_password_is_checked() {
        let person = Person {
            base: base(),
            password: "short".to_string(),
        };
        let errors = person.validate().unwrap_err();
        assert_eq!(errors.errors()[0].field, "password");
    }

    #[test]
    fn person_out_drops_password() {
        let person: Person = serde_json::from_value(json!({
            "first_name": "David",
            "last_name": "Casas",
            "age": 26,
            "password": "supersecret"
        }))
        .unwrap();

        let out = serde_json::to_value(PersonOut::from(person)).unwrap();
        assert!(out.get("password").is_none());
        assert!(out["hair_color"].is_null());
    }

    #[test]
    fn short_location_fields_are_all_reported() {
        let loc = Location {
            city: "AB".to_string(),
            state: "CD".to_string(),
            country: "EF".to_string(),
        };
        assert_eq!(loc.validate().unwrap_err().errors().len(), 3);
    }

    #[test]
    fn embedded_errors_carry_their_key() {
        let payload = PersonWithLocation {
            person: Person {
                base: PersonBase {
                    age: -1,
                    ..base()
                },
                password: "supersecret".to_string(),
            },
            location: Location {
                city: "X".to_string(),
                ..location()
            },
        };

        let errors = payload.validate().unwrap_err();
        let fields: Vec<_> = errors.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["person.age", "location.city"]);
    }

    #[test]
    fn located_person_merges_fields() {
        let merged = LocatedPerson::from(PersonWithLocation {
            person: Person {
                base: base(),
                password: "supersecret".to_string(),
            },
            location: location(),
        });

        let value = serde_json::to_value(merged).unwrap();
        assert_eq!(value["first_name"], "David");
        assert_eq!(value["city"], "Bogota");
        assert!(value.get("password").is_none());
    }
}

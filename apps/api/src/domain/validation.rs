use serde::Serialize;
use std::fmt;

/// A single failed constraint on a request field
///
/// `field` is a dotted path into the payload, e.g. `person.first_name`
/// or `by.email`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every constraint violation found while validating a payload
///
/// Validation does not stop at the first failure; callers get the full list
/// so a client can fix all fields in one round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} validation error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Folds the errors of a nested model under `prefix`
    pub fn nest(&mut self, prefix: &str, inner: ValidationErrors) {
        for error in inner.errors {
            self.errors.push(FieldError {
                field: format!("{}.{}", prefix, error.field),
                message: error.message,
            });
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Checks a string's length in characters against inclusive bounds
    pub fn check_length(&mut self, field: &str, value: &str, min: usize, max: Option<usize>) {
        let len = value.chars().count();
        if len < min {
            self.add(
                field,
                format!("must be at least {} character(s), got {}", min, len),
            );
        } else if let Some(max) = max {
            if len > max {
                self.add(
                    field,
                    format!("must be at most {} character(s), got {}", max, len),
                );
            }
        }
    }

    /// Validates a nested model and folds its errors under `prefix`
    pub fn check_nested<V: Validate>(&mut self, prefix: &str, value: &V) {
        if let Err(inner) = value.validate() {
            self.nest(prefix, inner);
        }
    }
}

/// Schema-level constraints a payload must satisfy after it has been decoded
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

impl<V: Validate> Validate for Option<V> {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match self {
            Some(inner) => inner.validate(),
            None => Ok(()),
        }
    }
}

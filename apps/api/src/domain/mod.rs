// Domain layer module exports
// Schema models, their validation rules and the repository ports
// Domain is independent of infrastructure concerns

pub mod person;
pub mod query;
pub mod repositories;
pub mod tweet;
pub mod user;
pub mod validation;

pub use validation::{FieldError, Validate, ValidationErrors};

// User domain module
// Public profile, signup/login/update payloads and the Email value object

#![allow(clippy::module_inception)]

pub mod user;
pub mod value_objects;

pub use user::{User, UserLogin, UserRegister, UserUpdate};
pub use value_objects::Email;

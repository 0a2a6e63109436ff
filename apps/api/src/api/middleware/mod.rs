// Request guards and shared extractors run ahead of handlers

pub mod headers;
pub mod query_or_cookie;

pub use headers::{VerifiedKey, VerifiedToken};
pub use query_or_cookie::QueryOrCookie;

// HTTP handlers, one module per demo resource

pub mod hello;
pub mod people;
pub mod tweets;
pub mod users;

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

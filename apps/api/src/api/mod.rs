// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;

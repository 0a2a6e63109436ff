//! Tutorial API Library
//!
//! Three small demo APIs built on axum: dependency injection through
//! extractors, request validation against schema models, and users/tweets
//! persisted to flat JSON files.

pub mod api;
pub mod app;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;

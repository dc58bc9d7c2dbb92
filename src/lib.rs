//! Library crate for lineup-back, exposing modules for binaries and
//! integration tests.

/// Environment-driven configuration.
pub mod config;
/// PostgreSQL access: pool, repositories, mappers, conditional updates.
pub mod dao;
/// Request and response payloads.
pub mod dto;
/// Error types spanning the service and HTTP layers.
pub mod error;
/// HTTP route handlers.
pub mod routes;
/// Business logic orchestrating the dao and dto layers.
pub mod services;
/// Shared application state.
pub mod state;

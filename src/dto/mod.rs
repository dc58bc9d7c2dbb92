/// Shared response payloads.
pub mod common;
/// Game request payloads.
pub mod game;
/// Health check payload.
pub mod health;
/// Team request payloads.
pub mod team;
/// Validation helpers for request payloads.
pub mod validation;

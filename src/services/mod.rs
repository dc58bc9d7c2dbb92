/// OpenAPI documentation generation.
pub mod documentation;
/// Game CRUD logic.
pub mod game_service;
/// Health check service.
pub mod health_service;
/// Slug derivation for team titles.
pub mod slug;
/// Team CRUD logic.
pub mod team_service;

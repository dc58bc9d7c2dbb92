use serde::Serialize;
use utoipa::ToSchema;

/// Health payload returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status ("ok" or "degraded").
    pub status: String,
}

impl HealthResponse {
    /// The store answered the ping.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }

    /// The store is unreachable; requests touching it will fail.
    pub fn degraded() -> Self {
        Self {
            status: "degraded".to_string(),
        }
    }
}

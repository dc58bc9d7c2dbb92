use tracing::warn;

use crate::{dao::postgres, dto::health::HealthResponse, state::SharedState};

/// Respond with the service health, degraded when the store is unreachable.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    match postgres::ping(state.pool()).await {
        Ok(()) => HealthResponse::ok(),
        Err(err) => {
            warn!(error = %err, "storage health check failed");
            HealthResponse::degraded()
        }
    }
}

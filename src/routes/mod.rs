use axum::{Json, Router, routing::get};

use crate::{dto::common::EndpointDescriptor, error::AppError, state::SharedState};

/// Swagger UI routes.
pub mod docs;
/// Game CRUD routes.
pub mod game;
/// Health check routes.
pub mod health;
/// Team CRUD routes.
pub mod team;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = Router::new()
        .route("/", get(index))
        .merge(health::router())
        .merge(team::router())
        .merge(game::router());

    api_router
        .merge(docs::router())
        .fallback(not_found)
        .with_state(state)
}

/// List the endpoints exposed by this API.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Available endpoints", body = [EndpointDescriptor]))
)]
pub async fn index() -> Json<Vec<EndpointDescriptor>> {
    Json(vec![
        EndpointDescriptor::new("/teams", &["GET", "POST"]),
        EndpointDescriptor::new("/teams/{slug}", &["GET", "PATCH", "DELETE"]),
        EndpointDescriptor::new("/teams/{slug}/games", &["GET", "POST"]),
        EndpointDescriptor::new("/teams/{slug}/games/{gameId}", &["GET", "PATCH", "DELETE"]),
    ])
}

/// Fallback for paths no route matches.
async fn not_found() -> AppError {
    AppError::NotFound("no route matches the requested path".into())
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::state::AppState;

    fn test_router() -> Router<()> {
        // Lazy pool: never connects unless a handler actually touches it.
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost:1/unreachable")
            .expect("lazy pool");
        router(AppState::new(pool))
    }

    #[tokio::test]
    async fn index_lists_endpoints() {
        let response = test_router()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let entries = body.as_array().expect("array body");

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["href"], "/teams");
        assert_eq!(entries[1]["methods"][1], "PATCH");
    }

    #[tokio::test]
    async fn unmatched_paths_fall_back_to_not_found() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/nowhere")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["message"].as_str().unwrap().contains("no route"));
    }
}

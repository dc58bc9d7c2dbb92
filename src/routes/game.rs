use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dao::models::Game,
    dto::game::{CreateGameRequest, UpdateGameRequest},
    error::AppError,
    services::game_service,
    state::SharedState,
};

/// Configure the game routes subtree, nested under the owning team's slug.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams/{slug}/games", get(list_games).post(create_game))
        .route(
            "/teams/{slug}/games/{game_id}",
            get(get_game).patch(update_game).delete(delete_game),
        )
}

/// List the games owned by a team.
#[utoipa::path(
    get,
    path = "/teams/{slug}/games",
    tag = "games",
    params(("slug" = String, Path, description = "Slug of the owning team")),
    responses(
        (status = 200, description = "Games of the team", body = [Game]),
        (status = 404, description = "No team with that slug")
    )
)]
pub async fn list_games(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Game>>, AppError> {
    Ok(Json(game_service::list_games(&state, &slug).await?))
}

/// Create a game under a team.
#[utoipa::path(
    post,
    path = "/teams/{slug}/games",
    tag = "games",
    params(("slug" = String, Path, description = "Slug of the owning team")),
    request_body = CreateGameRequest,
    responses(
        (status = 200, description = "Game created", body = Game),
        (status = 404, description = "No team with that slug"),
        (status = 409, description = "Identifier or title already used within the team")
    )
)]
pub async fn create_game(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    Json(payload): Json<CreateGameRequest>,
) -> Result<Json<Game>, AppError> {
    payload.validate()?;
    Ok(Json(game_service::create_game(&state, &slug, payload).await?))
}

/// Fetch one game by its external identifier.
#[utoipa::path(
    get,
    path = "/teams/{slug}/games/{game_id}",
    tag = "games",
    params(
        ("slug" = String, Path, description = "Slug of the owning team"),
        ("game_id" = String, Path, description = "External identifier of the game")
    ),
    responses(
        (status = 200, description = "The game", body = Game),
        (status = 404, description = "No such team or game")
    )
)]
pub async fn get_game(
    State(state): State<SharedState>,
    Path((slug, game_id)): Path<(String, String)>,
) -> Result<Json<Game>, AppError> {
    Ok(Json(game_service::get_game(&state, &slug, &game_id).await?))
}

/// Partially update a game.
#[utoipa::path(
    patch,
    path = "/teams/{slug}/games/{game_id}",
    tag = "games",
    params(
        ("slug" = String, Path, description = "Slug of the owning team"),
        ("game_id" = String, Path, description = "External identifier of the game")
    ),
    request_body = UpdateGameRequest,
    responses(
        (status = 200, description = "Game updated", body = Game),
        (status = 404, description = "No such team or game")
    )
)]
pub async fn update_game(
    State(state): State<SharedState>,
    Path((slug, game_id)): Path<(String, String)>,
    Json(payload): Json<UpdateGameRequest>,
) -> Result<Json<Game>, AppError> {
    payload.validate()?;
    Ok(Json(
        game_service::update_game(&state, &slug, &game_id, payload).await?,
    ))
}

/// Delete a game by its external identifier.
#[utoipa::path(
    delete,
    path = "/teams/{slug}/games/{game_id}",
    tag = "games",
    params(
        ("slug" = String, Path, description = "Slug of the owning team"),
        ("game_id" = String, Path, description = "External identifier of the game")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 404, description = "No such team or game")
    )
)]
pub async fn delete_game(
    State(state): State<SharedState>,
    Path((slug, game_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    game_service::delete_game(&state, &slug, &game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

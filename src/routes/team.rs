use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    dao::models::Team,
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::AppError,
    services::team_service,
    state::SharedState,
};

/// Configure the team routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route(
            "/teams/{slug}",
            get(get_team).patch(update_team).delete(delete_team),
        )
}

/// List all teams without their games.
#[utoipa::path(
    get,
    path = "/teams",
    tag = "teams",
    responses((status = 200, description = "All teams", body = [Team]))
)]
pub async fn list_teams(State(state): State<SharedState>) -> Result<Json<Vec<Team>>, AppError> {
    Ok(Json(team_service::list_teams(&state).await?))
}

/// Create a team; the slug is derived from the title.
#[utoipa::path(
    post,
    path = "/teams",
    tag = "teams",
    request_body = CreateTeamRequest,
    responses(
        (status = 200, description = "Team created", body = Team),
        (status = 409, description = "A team with the derived slug already exists")
    )
)]
pub async fn create_team(
    State(state): State<SharedState>,
    Json(payload): Json<CreateTeamRequest>,
) -> Result<Json<Team>, AppError> {
    payload.validate()?;
    Ok(Json(team_service::create_team(&state, payload).await?))
}

/// Fetch one team by slug, with its games embedded when it owns any.
#[utoipa::path(
    get,
    path = "/teams/{slug}",
    tag = "teams",
    params(("slug" = String, Path, description = "Slug of the team")),
    responses(
        (status = 200, description = "The team", body = Team),
        (status = 404, description = "No team with that slug")
    )
)]
pub async fn get_team(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<Json<Team>, AppError> {
    Ok(Json(team_service::get_team(&state, &slug).await?))
}

/// Partially update a team; a new title re-derives the slug.
#[utoipa::path(
    patch,
    path = "/teams/{slug}",
    tag = "teams",
    params(("slug" = String, Path, description = "Slug of the team")),
    request_body = UpdateTeamRequest,
    responses(
        (status = 200, description = "Team updated", body = Team),
        (status = 404, description = "No team with that slug")
    )
)]
pub async fn update_team(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
    Json(payload): Json<UpdateTeamRequest>,
) -> Result<Json<Team>, AppError> {
    payload.validate()?;
    Ok(Json(team_service::update_team(&state, &slug, payload).await?))
}

/// Delete a team by slug.
#[utoipa::path(
    delete,
    path = "/teams/{slug}",
    tag = "teams",
    params(("slug" = String, Path, description = "Slug of the team")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "No team with that slug")
    )
)]
pub async fn delete_team(
    State(state): State<SharedState>,
    Path(slug): Path<String>,
) -> Result<StatusCode, AppError> {
    team_service::delete_team(&state, &slug).await?;
    Ok(StatusCode::NO_CONTENT)
}

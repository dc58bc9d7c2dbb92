//! Game CRUD orchestration, always scoped to the owning team.

use crate::{
    dao::{
        game::{GameRepository, NewGame},
        mappers::{game_from_record, games_from_records, team_from_record},
        models::{Game, Team},
        team::TeamRepository,
        update::{BindValue, ConditionalUpdate},
    },
    dto::game::{CreateGameRequest, UpdateGameRequest},
    error::ServiceError,
    state::SharedState,
};

/// List the games owned by a team.
pub async fn list_games(state: &SharedState, slug: &str) -> Result<Vec<Game>, ServiceError> {
    let team = owning_team(state, slug).await?;
    let games = GameRepository::new(state.pool().clone());
    let records = games.list_by_team(team.id).await?;
    Ok(games_from_records(records))
}

/// Fetch one game by its external identifier within a team.
pub async fn get_game(
    state: &SharedState,
    slug: &str,
    game_id: &str,
) -> Result<Game, ServiceError> {
    let team = owning_team(state, slug).await?;
    let games = GameRepository::new(state.pool().clone());
    game_from_record(games.find(team.id, game_id).await?).ok_or_else(|| game_not_found(game_id))
}

/// Create a game under a team. Both the external identifier and the title
/// must be unused within that team.
pub async fn create_game(
    state: &SharedState,
    slug: &str,
    request: CreateGameRequest,
) -> Result<Game, ServiceError> {
    let team = owning_team(state, slug).await?;
    let games = GameRepository::new(state.pool().clone());

    if games.find(team.id, &request.game_id).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "game `{}` already exists",
            request.game_id
        )));
    }
    if games.find_by_title(team.id, &request.title).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "a game titled `{}` already exists",
            request.title
        )));
    }

    let record = games
        .insert(
            team.id,
            NewGame {
                game_id: &request.game_id,
                title: &request.title,
                units: request.units,
                semester: request.semester,
                level: request.level.as_deref(),
                url: request.url.as_deref(),
            },
        )
        .await?;

    game_from_record(Some(record))
        .ok_or_else(|| ServiceError::Internal("inserted game row failed validation".into()))
}

/// Partially update a game addressed by its external identifier.
pub async fn update_game(
    state: &SharedState,
    slug: &str,
    game_id: &str,
    request: UpdateGameRequest,
) -> Result<Game, ServiceError> {
    let team = owning_team(state, slug).await?;
    let games = GameRepository::new(state.pool().clone());
    let Some(existing) = game_from_record(games.find(team.id, game_id).await?) else {
        return Err(game_not_found(game_id));
    };

    if let Some(new_game_id) = &request.game_id {
        if new_game_id != &existing.game_id && games.find(team.id, new_game_id).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "game `{new_game_id}` already exists"
            )));
        }
    }

    let fields = [
        request.game_id.as_ref().map(|_| "game_id"),
        request.title.as_ref().map(|_| "title"),
        request.level.as_ref().map(|_| "level"),
        request.url.as_ref().map(|_| "url"),
        request.semester.as_ref().map(|_| "semester"),
        request.units.as_ref().map(|_| "units"),
    ];
    let values = [
        request.game_id.clone().map_or(BindValue::Null, BindValue::Text),
        request.title.clone().map_or(BindValue::Null, BindValue::Text),
        request.level.clone().map_or(BindValue::Null, BindValue::Text),
        request.url.clone().map_or(BindValue::Null, BindValue::Text),
        request
            .semester
            .map_or(BindValue::Null, |semester| {
                BindValue::Text(semester.as_str().to_owned())
            }),
        request.units.map_or(BindValue::Null, BindValue::Number),
    ];

    match games.update(existing.id, &fields, &values).await? {
        ConditionalUpdate::Updated(record) => game_from_record(Some(record))
            .ok_or_else(|| ServiceError::Internal("updated game row failed validation".into())),
        ConditionalUpdate::NothingToUpdate => Err(ServiceError::InvalidInput(
            "no updatable fields supplied".into(),
        )),
        ConditionalUpdate::NotFound => Err(game_not_found(game_id)),
    }
}

/// Delete a game by its external identifier within a team. Succeeds only
/// when exactly one row was removed.
pub async fn delete_game(
    state: &SharedState,
    slug: &str,
    game_id: &str,
) -> Result<(), ServiceError> {
    let team = owning_team(state, slug).await?;
    let games = GameRepository::new(state.pool().clone());
    match games.delete(team.id, game_id).await? {
        1 => Ok(()),
        _ => Err(game_not_found(game_id)),
    }
}

/// Resolve the team addressed by `slug`, the common prefix of every game
/// operation.
async fn owning_team(state: &SharedState, slug: &str) -> Result<Team, ServiceError> {
    let teams = TeamRepository::new(state.pool().clone());
    team_from_record(teams.find_by_slug(slug).await?, None)
        .ok_or_else(|| ServiceError::NotFound(format!("team `{slug}` not found")))
}

fn game_not_found(game_id: &str) -> ServiceError {
    ServiceError::NotFound(format!("game `{game_id}` not found"))
}

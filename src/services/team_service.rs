//! Team CRUD orchestration.

use crate::{
    dao::{
        game::GameRepository,
        mappers::{team_from_record, teams_from_records},
        models::Team,
        team::TeamRepository,
        update::{BindValue, ConditionalUpdate},
    },
    dto::team::{CreateTeamRequest, UpdateTeamRequest},
    error::ServiceError,
    services::slug::slugify,
    state::SharedState,
};

/// List all teams without their games.
pub async fn list_teams(state: &SharedState) -> Result<Vec<Team>, ServiceError> {
    let teams = TeamRepository::new(state.pool().clone());
    let records = teams.list().await?;
    Ok(teams_from_records(records))
}

/// Fetch a single team by slug, embedding its games when it owns any.
pub async fn get_team(state: &SharedState, slug: &str) -> Result<Team, ServiceError> {
    let teams = TeamRepository::new(state.pool().clone());
    let Some(record) = teams.find_by_slug(slug).await? else {
        return Err(not_found(slug));
    };

    let games = match record.id {
        Some(team_id) => {
            let games = GameRepository::new(state.pool().clone());
            Some(games.list_by_team(team_id).await?)
        }
        None => None,
    };

    team_from_record(Some(record), games).ok_or_else(|| not_found(slug))
}

/// Create a team, deriving its slug from the title.
pub async fn create_team(
    state: &SharedState,
    request: CreateTeamRequest,
) -> Result<Team, ServiceError> {
    let slug = slugify(&request.title);
    if slug.is_empty() {
        return Err(ServiceError::InvalidInput(
            "title must contain at least one alphanumeric character".into(),
        ));
    }

    let teams = TeamRepository::new(state.pool().clone());
    if teams.find_by_slug(&slug).await?.is_some() {
        return Err(ServiceError::Conflict(format!(
            "team `{slug}` already exists"
        )));
    }

    let record = teams
        .insert(&request.title, &slug, request.description.as_deref())
        .await?;

    team_from_record(Some(record), None)
        .ok_or_else(|| ServiceError::Internal("inserted team row failed validation".into()))
}

/// Partially update a team. A new title also re-derives the slug, so the
/// team's external address changes with its name.
pub async fn update_team(
    state: &SharedState,
    slug: &str,
    request: UpdateTeamRequest,
) -> Result<Team, ServiceError> {
    let teams = TeamRepository::new(state.pool().clone());
    let Some(existing) = team_from_record(teams.find_by_slug(slug).await?, None) else {
        return Err(not_found(slug));
    };

    let new_slug = request.title.as_deref().map(slugify);
    if let Some(candidate) = &new_slug {
        if candidate.is_empty() {
            return Err(ServiceError::InvalidInput(
                "title must contain at least one alphanumeric character".into(),
            ));
        }
        if candidate != &existing.slug && teams.find_by_slug(candidate).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "team `{candidate}` already exists"
            )));
        }
    }

    let fields = [
        request.title.as_ref().map(|_| "title"),
        new_slug.as_ref().map(|_| "slug"),
        request.description.as_ref().map(|_| "description"),
    ];
    let values = [
        request.title.clone().map_or(BindValue::Null, BindValue::Text),
        new_slug.map_or(BindValue::Null, BindValue::Text),
        request
            .description
            .clone()
            .map_or(BindValue::Null, BindValue::Text),
    ];

    match teams.update(existing.id, &fields, &values).await? {
        ConditionalUpdate::Updated(record) => team_from_record(Some(record), None)
            .ok_or_else(|| ServiceError::Internal("updated team row failed validation".into())),
        ConditionalUpdate::NothingToUpdate => Err(ServiceError::InvalidInput(
            "no updatable fields supplied".into(),
        )),
        ConditionalUpdate::NotFound => Err(not_found(slug)),
    }
}

/// Delete a team by slug. Succeeds only when exactly one row was removed.
pub async fn delete_team(state: &SharedState, slug: &str) -> Result<(), ServiceError> {
    let teams = TeamRepository::new(state.pool().clone());
    match teams.delete_by_slug(slug).await? {
        1 => Ok(()),
        _ => Err(not_found(slug)),
    }
}

fn not_found(slug: &str) -> ServiceError {
    ServiceError::NotFound(format!("team `{slug}` not found"))
}

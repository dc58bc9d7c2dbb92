use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for lineup-back.
#[openapi(
    paths(
        crate::routes::index,
        crate::routes::health::healthcheck,
        crate::routes::team::list_teams,
        crate::routes::team::create_team,
        crate::routes::team::get_team,
        crate::routes::team::update_team,
        crate::routes::team::delete_team,
        crate::routes::game::list_games,
        crate::routes::game::create_game,
        crate::routes::game::get_game,
        crate::routes::game::update_game,
        crate::routes::game::delete_game,
    ),
    components(
        schemas(
            crate::dao::models::Team,
            crate::dao::models::Game,
            crate::dao::models::TeamLinks,
            crate::dao::models::Link,
            crate::dao::models::Semester,
            crate::dto::common::EndpointDescriptor,
            crate::dto::health::HealthResponse,
            crate::dto::team::CreateTeamRequest,
            crate::dto::team::UpdateTeamRequest,
            crate::dto::game::CreateGameRequest,
            crate::dto::game::UpdateGameRequest,
        )
    ),
    tags(
        (name = "teams", description = "Team management endpoints"),
        (name = "games", description = "Game management endpoints scoped to a team"),
        (name = "health", description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

//! Game persistence, always scoped to the owning team's numeric id.

use sqlx::PgPool;

use crate::dao::{
    models::{GameRecord, Semester},
    storage::{StorageError, StorageResult},
    update::{BindValue, ConditionalUpdate, EntityTable, conditional_update},
};

const LIST_GAMES_BY_TEAM: &str = "SELECT * FROM game WHERE team_id = $1 ORDER BY id";
const FIND_GAME: &str = "SELECT * FROM game WHERE team_id = $1 AND game_id = $2";
const FIND_GAME_BY_TITLE: &str = "SELECT * FROM game WHERE team_id = $1 AND title = $2";
const INSERT_GAME: &str = "INSERT INTO game (title, units, semester, level, url, team_id, game_id) \
     VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *";
const DELETE_GAME: &str = "DELETE FROM game WHERE team_id = $1 AND game_id = $2";

/// Fields required to insert a game under a team.
#[derive(Debug)]
pub struct NewGame<'a> {
    pub game_id: &'a str,
    pub title: &'a str,
    pub units: Option<f64>,
    pub semester: Option<Semester>,
    pub level: Option<&'a str>,
    pub url: Option<&'a str>,
}

/// Repository encapsulating access to the `game` table.
#[derive(Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All game rows owned by a team, in id order.
    pub async fn list_by_team(&self, team_id: i32) -> StorageResult<Vec<GameRecord>> {
        sqlx::query_as::<_, GameRecord>(LIST_GAMES_BY_TEAM)
            .bind(team_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| StorageError::query(LIST_GAMES_BY_TEAM, source))
    }

    /// Game row addressed by its external identifier within a team.
    pub async fn find(&self, team_id: i32, game_id: &str) -> StorageResult<Option<GameRecord>> {
        sqlx::query_as::<_, GameRecord>(FIND_GAME)
            .bind(team_id)
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StorageError::query(FIND_GAME, source))
    }

    /// Game row addressed by its title within a team.
    pub async fn find_by_title(
        &self,
        team_id: i32,
        title: &str,
    ) -> StorageResult<Option<GameRecord>> {
        sqlx::query_as::<_, GameRecord>(FIND_GAME_BY_TITLE)
            .bind(team_id)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StorageError::query(FIND_GAME_BY_TITLE, source))
    }

    /// Insert a new game under a team; the store assigns the id.
    pub async fn insert(&self, team_id: i32, game: NewGame<'_>) -> StorageResult<GameRecord> {
        sqlx::query_as::<_, GameRecord>(INSERT_GAME)
            .bind(game.title)
            .bind(game.units)
            .bind(game.semester.map(Semester::as_str))
            .bind(game.level)
            .bind(game.url)
            .bind(team_id)
            .bind(game.game_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| StorageError::query(INSERT_GAME, source))
    }

    /// Apply a conditional partial update to the game identified by `id`.
    pub async fn update(
        &self,
        id: i32,
        fields: &[Option<&str>],
        values: &[BindValue],
    ) -> StorageResult<ConditionalUpdate<GameRecord>> {
        conditional_update(&self.pool, EntityTable::Game, id, fields, values).await
    }

    /// Delete by external identifier within a team, returning the number of
    /// rows removed.
    pub async fn delete(&self, team_id: i32, game_id: &str) -> StorageResult<u64> {
        sqlx::query(DELETE_GAME)
            .bind(team_id)
            .bind(game_id)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|source| StorageError::query(DELETE_GAME, source))
    }
}

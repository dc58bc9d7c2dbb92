//! Team persistence: list, lookup, insert, partial update, delete.

use sqlx::PgPool;

use crate::dao::{
    models::TeamRecord,
    storage::{StorageError, StorageResult},
    update::{BindValue, ConditionalUpdate, EntityTable, conditional_update},
};

const LIST_TEAMS: &str = "SELECT * FROM team ORDER BY id";
const FIND_TEAM_BY_SLUG: &str = "SELECT * FROM team WHERE slug = $1";
const INSERT_TEAM: &str = "INSERT INTO team (title, slug, description) VALUES ($1, $2, $3) \
     RETURNING id, title, slug, description, created, updated";
const DELETE_TEAM_BY_SLUG: &str = "DELETE FROM team WHERE slug = $1";

/// Repository encapsulating access to the `team` table.
#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All team rows in id order.
    pub async fn list(&self) -> StorageResult<Vec<TeamRecord>> {
        sqlx::query_as::<_, TeamRecord>(LIST_TEAMS)
            .fetch_all(&self.pool)
            .await
            .map_err(|source| StorageError::query(LIST_TEAMS, source))
    }

    /// Team row addressed by its slug, `None` when no row matches.
    pub async fn find_by_slug(&self, slug: &str) -> StorageResult<Option<TeamRecord>> {
        sqlx::query_as::<_, TeamRecord>(FIND_TEAM_BY_SLUG)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|source| StorageError::query(FIND_TEAM_BY_SLUG, source))
    }

    /// Insert a new team; the store assigns id and timestamps.
    pub async fn insert(
        &self,
        title: &str,
        slug: &str,
        description: Option<&str>,
    ) -> StorageResult<TeamRecord> {
        sqlx::query_as::<_, TeamRecord>(INSERT_TEAM)
            .bind(title)
            .bind(slug)
            .bind(description)
            .fetch_one(&self.pool)
            .await
            .map_err(|source| StorageError::query(INSERT_TEAM, source))
    }

    /// Apply a conditional partial update to the team identified by `id`.
    pub async fn update(
        &self,
        id: i32,
        fields: &[Option<&str>],
        values: &[BindValue],
    ) -> StorageResult<ConditionalUpdate<TeamRecord>> {
        conditional_update(&self.pool, EntityTable::Team, id, fields, values).await
    }

    /// Delete by slug, returning the number of rows removed.
    pub async fn delete_by_slug(&self, slug: &str) -> StorageResult<u64> {
        sqlx::query(DELETE_TEAM_BY_SLUG)
            .bind(slug)
            .execute(&self.pool)
            .await
            .map(|result| result.rows_affected())
            .map_err(|source| StorageError::query(DELETE_TEAM_BY_SLUG, source))
    }
}

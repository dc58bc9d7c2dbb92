//! Conditional partial updates against a single entity row.
//!
//! Callers supply parallel field and value lists; pairs are filtered jointly
//! by position so a dropped field always drops its value with it, and the
//! resulting statement touches exactly one row by id.

use sqlx::PgPool;
use sqlx::postgres::PgRow;

use crate::dao::storage::{StorageError, StorageResult};

/// Tables that accept conditional updates. A closed set, so statements can
/// only ever target the two entity tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntityTable {
    Team,
    Game,
}

impl EntityTable {
    /// Table name as it appears in SQL.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityTable::Team => "team",
            EntityTable::Game => "game",
        }
    }
}

/// Value bound into an update statement.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Text(String),
    Number(f64),
    Null,
}

/// Outcome of a conditional update.
#[derive(Debug)]
pub enum ConditionalUpdate<R> {
    /// The row was updated; carries its post-update state.
    Updated(R),
    /// No field/value pair survived filtering; no statement was issued.
    NothingToUpdate,
    /// The statement ran but the id matched no row.
    NotFound,
}

/// Build the update statement and its bind values.
///
/// A pair survives filtering only when its field name is present and
/// non-empty; the paired value is dropped with it. Returns `Ok(None)` when
/// nothing survives. Mismatched input lengths are a programmer error and
/// fail before any statement is built.
fn build_statement(
    table: EntityTable,
    fields: &[Option<&str>],
    values: &[BindValue],
) -> StorageResult<Option<(String, Vec<BindValue>)>> {
    if fields.len() != values.len() {
        return Err(StorageError::FieldValueMismatch {
            fields: fields.len(),
            values: values.len(),
        });
    }

    let pairs: Vec<(&str, BindValue)> = fields
        .iter()
        .zip(values)
        .filter_map(|(field, value)| match field {
            Some(name) if !name.is_empty() => Some((*name, value.clone())),
            _ => None,
        })
        .collect();

    if pairs.is_empty() {
        return Ok(None);
    }

    // id is always $1; field parameters start at $2.
    let assignments = pairs
        .iter()
        .enumerate()
        .map(|(i, (field, _))| format!("{field} = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");

    let statement = format!(
        "UPDATE {} SET {assignments} WHERE id = $1 RETURNING *",
        table.as_str()
    );
    let bound = pairs.into_iter().map(|(_, value)| value).collect();

    Ok(Some((statement, bound)))
}

/// Update the caller-supplied subset of fields on the row identified by
/// `id`, returning the updated row decoded as `R`.
pub async fn conditional_update<R>(
    pool: &PgPool,
    table: EntityTable,
    id: i32,
    fields: &[Option<&str>],
    values: &[BindValue],
) -> StorageResult<ConditionalUpdate<R>>
where
    R: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
{
    let Some((statement, bound)) = build_statement(table, fields, values)? else {
        return Ok(ConditionalUpdate::NothingToUpdate);
    };

    let mut query = sqlx::query_as::<_, R>(&statement).bind(id);
    for value in bound {
        query = match value {
            BindValue::Text(text) => query.bind(text),
            BindValue::Number(number) => query.bind(number),
            BindValue::Null => query.bind(Option::<String>::None),
        };
    }

    match query.fetch_optional(pool).await {
        Ok(Some(record)) => Ok(ConditionalUpdate::Updated(record)),
        Ok(None) => Ok(ConditionalUpdate::NotFound),
        Err(source) => Err(StorageError::query(&statement, source)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> BindValue {
        BindValue::Text(value.to_owned())
    }

    #[test]
    fn no_surviving_pairs_builds_nothing() {
        let built = build_statement(EntityTable::Team, &[], &[]).unwrap();
        assert!(built.is_none());

        let built = build_statement(
            EntityTable::Team,
            &[None, None],
            &[BindValue::Null, text("orphan")],
        )
        .unwrap();
        assert!(built.is_none());
    }

    #[test]
    fn mismatched_lengths_are_a_programmer_error() {
        let err = build_statement(EntityTable::Team, &[Some("title"), Some("slug")], &[text("a")])
            .unwrap_err();

        assert!(matches!(
            err,
            StorageError::FieldValueMismatch {
                fields: 2,
                values: 1
            }
        ));
    }

    #[test]
    fn single_pair_targets_one_row_by_id() {
        let (statement, bound) =
            build_statement(EntityTable::Team, &[Some("title")], &[text("Shooting Team")])
                .unwrap()
                .unwrap();

        assert_eq!(
            statement,
            "UPDATE team SET title = $2 WHERE id = $1 RETURNING *"
        );
        assert_eq!(bound, vec![text("Shooting Team")]);
    }

    #[test]
    fn filtering_is_joint_by_position() {
        let fields = [Some("title"), None, Some("slug")];
        let values = [text("New Title"), text("dropped with its field"), text("new-title")];

        let (statement, bound) = build_statement(EntityTable::Team, &fields, &values)
            .unwrap()
            .unwrap();

        assert_eq!(
            statement,
            "UPDATE team SET title = $2, slug = $3 WHERE id = $1 RETURNING *"
        );
        assert_eq!(bound, vec![text("New Title"), text("new-title")]);
    }

    #[test]
    fn empty_field_names_are_dropped() {
        let built = build_statement(EntityTable::Game, &[Some("")], &[text("x")]).unwrap();
        assert!(built.is_none());
    }

    #[test]
    fn null_value_survives_with_a_named_field() {
        let (statement, bound) =
            build_statement(EntityTable::Team, &[Some("description")], &[BindValue::Null])
                .unwrap()
                .unwrap();

        assert_eq!(
            statement,
            "UPDATE team SET description = $2 WHERE id = $1 RETURNING *"
        );
        assert_eq!(bound, vec![BindValue::Null]);
    }

    #[test]
    fn game_table_is_addressable() {
        let (statement, _) = build_statement(
            EntityTable::Game,
            &[Some("units"), Some("semester")],
            &[BindValue::Number(1.5), text("fall")],
        )
        .unwrap()
        .unwrap();

        assert_eq!(
            statement,
            "UPDATE game SET units = $2, semester = $3 WHERE id = $1 RETURNING *"
        );
    }
}

//! Mapping from raw store rows to validated domain entities.
//!
//! This module is the only trust boundary between persisted data and the rest
//! of the application: a row that does not satisfy the entity invariants maps
//! to `None`, never to a partially populated value. Required fields use a
//! truthy test, so a zero id or an empty title counts as missing.

use crate::dao::models::{Game, GameRecord, Link, Semester, Team, TeamLinks, TeamRecord};

/// Truthy check for required integer columns: present and positive.
fn required_id(value: Option<i32>) -> Option<i32> {
    value.filter(|id| *id > 0)
}

/// Truthy check for required text columns: present and non-empty.
fn required_text(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

/// Navigational links derived from a team slug alone.
fn team_links(slug: &str) -> TeamLinks {
    TeamLinks {
        self_link: Link {
            href: format!("/teams/{slug}"),
        },
        games: Link {
            href: format!("/teams/{slug}/games"),
        },
    }
}

/// Map a raw game row to a [`Game`], or `None` when `id`, `game_id`, or
/// `title` is missing or zero-valued. An unparsable semester degrades to
/// unset rather than rejecting the row.
pub fn game_from_record(record: Option<GameRecord>) -> Option<Game> {
    let record = record?;

    let id = required_id(record.id)?;
    let game_id = required_text(record.game_id)?;
    let title = required_text(record.title)?;

    Some(Game {
        id,
        game_id,
        title,
        units: record.units,
        semester: record.semester.as_deref().and_then(Semester::parse),
        level: record.level,
        url: record.url,
    })
}

/// Map a list of raw game rows, silently dropping rows that do not map. The
/// result preserves the input order and is at most as long as the input.
pub fn games_from_records(records: Vec<GameRecord>) -> Vec<Game> {
    records
        .into_iter()
        .filter_map(|record| game_from_record(Some(record)))
        .collect()
}

/// Map a raw team row to a [`Team`], or `None` when `id`, `title`, or `slug`
/// is missing or zero-valued.
///
/// When `games` is provided and maps to a non-empty list it is attached to
/// the result; otherwise the `games` field stays unset. The `_links` entries
/// are synthesized from the slug on every call.
pub fn team_from_record(
    record: Option<TeamRecord>,
    games: Option<Vec<GameRecord>>,
) -> Option<Team> {
    let record = record?;

    let id = required_id(record.id)?;
    let title = required_text(record.title)?;
    let slug = required_text(record.slug)?;

    let games = games.map(games_from_records).filter(|list| !list.is_empty());
    let links = team_links(&slug);

    Some(Team {
        id,
        title,
        slug,
        description: record.description,
        created: record.created,
        updated: record.updated,
        games,
        links,
    })
}

/// Map a list of raw team rows, dropping rows that do not map. Games are
/// never attached here; list contexts return bare teams.
pub fn teams_from_records(records: Vec<TeamRecord>) -> Vec<Team> {
    records
        .into_iter()
        .filter_map(|record| team_from_record(Some(record), None))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn team_record() -> TeamRecord {
        TeamRecord {
            id: Some(3),
            title: Some("Shooting Team".into()),
            slug: Some("shooting-team".into()),
            description: Some("varsity roster".into()),
            created: Some(Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()),
            updated: Some(Utc.with_ymd_and_hms(2026, 1, 11, 9, 30, 0).unwrap()),
        }
    }

    fn game_record() -> GameRecord {
        GameRecord {
            id: Some(7),
            game_id: Some("OPEN-01".into()),
            title: Some("Season Opener".into()),
            units: Some(1.5),
            semester: Some("fall".into()),
            level: Some("varsity".into()),
            url: Some("https://example.com/opener".into()),
            team_id: Some(3),
        }
    }

    #[test]
    fn maps_complete_team() {
        let team = team_from_record(Some(team_record()), None).unwrap();

        assert_eq!(team.id, 3);
        assert_eq!(team.title, "Shooting Team");
        assert_eq!(team.slug, "shooting-team");
        assert_eq!(team.description.as_deref(), Some("varsity roster"));
        assert!(team.created.is_some());
        assert!(team.games.is_none());
    }

    #[test]
    fn maps_complete_game() {
        let game = game_from_record(Some(game_record())).unwrap();

        assert_eq!(game.id, 7);
        assert_eq!(game.game_id, "OPEN-01");
        assert_eq!(game.semester, Some(Semester::Fall));
        assert_eq!(game.units, Some(1.5));
    }

    #[test]
    fn absent_input_maps_to_absent() {
        assert!(team_from_record(None, None).is_none());
        assert!(game_from_record(None).is_none());
    }

    #[test]
    fn missing_required_fields_map_to_absent() {
        let mut record = team_record();
        record.title = None;
        assert!(team_from_record(Some(record), None).is_none());

        let mut record = game_record();
        record.game_id = None;
        assert!(game_from_record(Some(record)).is_none());
    }

    #[test]
    fn zero_valued_required_fields_map_to_absent() {
        let mut record = team_record();
        record.id = Some(0);
        assert!(team_from_record(Some(record), None).is_none());

        let mut record = team_record();
        record.slug = Some(String::new());
        assert!(team_from_record(Some(record), None).is_none());

        let mut record = game_record();
        record.title = Some(String::new());
        assert!(game_from_record(Some(record)).is_none());
    }

    #[test]
    fn optional_fields_stay_unset() {
        let record = GameRecord {
            id: Some(1),
            game_id: Some("X-1".into()),
            title: Some("Friendly".into()),
            ..GameRecord::default()
        };

        let game = game_from_record(Some(record)).unwrap();
        assert!(game.units.is_none());
        assert!(game.semester.is_none());
        assert!(game.level.is_none());
        assert!(game.url.is_none());
    }

    #[test]
    fn unknown_semester_degrades_to_unset() {
        let mut record = game_record();
        record.semester = Some("midsummer".into());

        let game = game_from_record(Some(record)).unwrap();
        assert!(game.semester.is_none());
    }

    #[test]
    fn links_derive_from_slug_alone() {
        let first = team_from_record(Some(team_record()), None).unwrap();
        let second = team_from_record(Some(team_record()), None).unwrap();

        assert_eq!(first.links, second.links);
        assert_eq!(first.links.self_link.href, "/teams/shooting-team");
        assert_eq!(first.links.games.href, "/teams/shooting-team/games");
    }

    #[test]
    fn games_attach_only_when_non_empty() {
        let team = team_from_record(Some(team_record()), Some(vec![])).unwrap();
        assert!(team.games.is_none());

        let invalid = GameRecord::default();
        let team = team_from_record(Some(team_record()), Some(vec![invalid])).unwrap();
        assert!(team.games.is_none());

        let team = team_from_record(Some(team_record()), Some(vec![game_record()])).unwrap();
        assert_eq!(team.games.unwrap().len(), 1);
    }

    #[test]
    fn list_mapping_drops_invalid_rows_in_order() {
        let mut second = game_record();
        second.id = Some(9);
        second.game_id = Some("INV-02".into());

        let records = vec![game_record(), GameRecord::default(), second];
        let games = games_from_records(records);

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].game_id, "OPEN-01");
        assert_eq!(games[1].game_id, "INV-02");
    }

    #[test]
    fn team_list_mapping_never_attaches_games() {
        let teams = teams_from_records(vec![team_record(), TeamRecord::default()]);

        assert_eq!(teams.len(), 1);
        assert!(teams[0].games.is_none());
    }
}

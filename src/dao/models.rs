//! Persisted row shapes and the validated domain entities mapped from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Raw `team` row as returned by the store. Every column is optional so the
/// mapper can reject rows that drifted from the expected shape instead of
/// trusting the schema.
#[derive(Clone, Debug, Default, FromRow)]
pub struct TeamRecord {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// Raw `game` row as returned by the store.
#[derive(Clone, Debug, Default, FromRow)]
pub struct GameRecord {
    pub id: Option<i32>,
    pub game_id: Option<String>,
    pub title: Option<String>,
    pub units: Option<f64>,
    pub semester: Option<String>,
    pub level: Option<String>,
    pub url: Option<String>,
    pub team_id: Option<i32>,
}

/// Term a game runs in.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Semester {
    /// Column value stored for this semester.
    pub fn as_str(self) -> &'static str {
        match self {
            Semester::Spring => "spring",
            Semester::Summer => "summer",
            Semester::Fall => "fall",
            Semester::Winter => "winter",
        }
    }

    /// Parse a stored column value, `None` when it is not a known semester.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "spring" => Some(Semester::Spring),
            "summer" => Some(Semester::Summer),
            "fall" => Some(Semester::Fall),
            "winter" => Some(Semester::Winter),
            _ => None,
        }
    }
}

/// Navigational link descriptor attached to serialized teams.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Link {
    /// Path the link points at.
    pub href: String,
}

/// `self` and `games` links synthesized from a team slug.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct TeamLinks {
    /// Canonical location of the team itself.
    #[serde(rename = "self")]
    pub self_link: Link,
    /// Location of the games owned by the team.
    pub games: Link,
}

/// Validated game entity exposed over the API.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: i32,
    /// External identifier, distinct from the store-assigned `id`.
    pub game_id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<Semester>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Validated team entity exposed over the API.
#[derive(Clone, Debug, PartialEq, Serialize, ToSchema)]
pub struct Team {
    pub id: i32,
    pub title: String,
    /// URL-safe external lookup key, derived from the title.
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Owned games, present only in contexts that explicitly request them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub games: Option<Vec<Game>>,
    #[serde(rename = "_links")]
    pub links: TeamLinks,
}

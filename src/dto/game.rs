//! Game request payloads.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dao::models::Semester;
use crate::dto::validation::{
    at_least_one_field, validate_game_id, validate_level, validate_title, validate_units,
    validate_url_length,
};

/// Payload for creating a game under a team.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGameRequest {
    /// External identifier, unique within the owning team.
    #[validate(length(min = 1, max = 16))]
    pub game_id: String,
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    #[serde(default)]
    #[validate(range(min = 0.5, max = 100.0))]
    pub units: Option<f64>,
    #[serde(default)]
    pub semester: Option<Semester>,
    #[serde(default)]
    #[validate(length(max = 128))]
    pub level: Option<String>,
    #[serde(default)]
    #[validate(url, length(max = 256))]
    pub url: Option<String>,
}

/// Partial update of a game. At least one field must be supplied.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGameRequest {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub units: Option<f64>,
    #[serde(default)]
    pub semester: Option<Semester>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl UpdateGameRequest {
    fn is_empty(&self) -> bool {
        self.game_id.is_none()
            && self.title.is_none()
            && self.units.is_none()
            && self.semester.is_none()
            && self.level.is_none()
            && self.url.is_none()
    }
}

impl Validate for UpdateGameRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(game_id) = &self.game_id {
            if let Err(err) = validate_game_id(game_id) {
                errors.add("gameId", err);
            }
        }
        if let Some(title) = &self.title {
            if let Err(err) = validate_title(title) {
                errors.add("title", err);
            }
        }
        if let Some(units) = self.units {
            if let Err(err) = validate_units(units) {
                errors.add("units", err);
            }
        }
        if let Some(level) = &self.level {
            if let Err(err) = validate_level(level) {
                errors.add("level", err);
            }
        }
        if let Some(url) = &self.url {
            if let Err(err) = validate_url_length(url) {
                errors.add("url", err);
            }
        }
        if self.is_empty() {
            errors.add("body", at_least_one_field());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_payload_uses_camel_case_field_names() {
        let request: CreateGameRequest =
            serde_json::from_str(r#"{"gameId": "OPEN-01", "title": "Season Opener"}"#).unwrap();

        assert_eq!(request.game_id, "OPEN-01");
        assert!(request.units.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn semester_parses_from_lowercase_wire_form() {
        let request: CreateGameRequest = serde_json::from_str(
            r#"{"gameId": "OPEN-01", "title": "Season Opener", "semester": "fall"}"#,
        )
        .unwrap();

        assert_eq!(request.semester, Some(Semester::Fall));
    }

    #[test]
    fn unknown_semester_is_rejected_at_deserialization() {
        let result = serde_json::from_str::<CreateGameRequest>(
            r#"{"gameId": "OPEN-01", "title": "Season Opener", "semester": "midsummer"}"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn empty_update_is_rejected() {
        assert!(UpdateGameRequest::default().validate().is_err());
    }

    #[test]
    fn out_of_range_units_update_is_rejected() {
        let request = UpdateGameRequest {
            units: Some(200.0),
            ..UpdateGameRequest::default()
        };
        assert!(request.validate().is_err());
    }
}

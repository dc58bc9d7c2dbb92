//! Team request payloads.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::dto::validation::{at_least_one_field, validate_description, validate_title};

/// Payload for creating a team. The slug is derived server-side from the
/// title.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 64))]
    pub title: String,
    #[serde(default)]
    #[validate(length(max = 1000))]
    pub description: Option<String>,
}

/// Partial update of a team. At least one field must be supplied; a new
/// title also re-derives the slug.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateTeamRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for UpdateTeamRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Some(title) = &self.title {
            if let Err(err) = validate_title(title) {
                errors.add("title", err);
            }
        }
        if let Some(description) = &self.description {
            if let Err(err) = validate_description(description) {
                errors.add("description", err);
            }
        }
        if self.title.is_none() && self.description.is_none() {
            errors.add("body", at_least_one_field());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_rejected() {
        assert!(UpdateTeamRequest::default().validate().is_err());
    }

    #[test]
    fn single_field_update_is_accepted() {
        let request = UpdateTeamRequest {
            description: Some("new description".into()),
            ..UpdateTeamRequest::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn blank_title_update_is_rejected() {
        let request = UpdateTeamRequest {
            title: Some("  ".into()),
            ..UpdateTeamRequest::default()
        };
        assert!(request.validate().is_err());
    }
}

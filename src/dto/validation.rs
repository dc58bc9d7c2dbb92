//! Validation helpers shared by request payloads.

use validator::ValidationError;

/// Longest accepted team or game title.
pub const MAX_TITLE_LENGTH: usize = 64;
/// Longest accepted external game identifier.
pub const MAX_GAME_ID_LENGTH: usize = 16;
/// Longest accepted team description.
pub const MAX_DESCRIPTION_LENGTH: usize = 1000;
/// Longest accepted level.
pub const MAX_LEVEL_LENGTH: usize = 128;
/// Longest accepted URL.
pub const MAX_URL_LENGTH: usize = 256;
/// Accepted range for the units credit value.
pub const UNITS_RANGE: (f64, f64) = (0.5, 100.0);

fn invalid(code: &'static str, message: String) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// Titles must be non-blank and at most [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(invalid("title_blank", "title must not be blank".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(invalid(
            "title_length",
            format!("title must be at most {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Game identifiers must be non-blank and at most [`MAX_GAME_ID_LENGTH`]
/// characters.
pub fn validate_game_id(game_id: &str) -> Result<(), ValidationError> {
    if game_id.trim().is_empty() {
        return Err(invalid("game_id_blank", "gameId must not be blank".into()));
    }
    if game_id.chars().count() > MAX_GAME_ID_LENGTH {
        return Err(invalid(
            "game_id_length",
            format!("gameId must be at most {MAX_GAME_ID_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Descriptions are free-form but bounded.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(invalid(
            "description_length",
            format!("description must be at most {MAX_DESCRIPTION_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Levels are free-form but bounded.
pub fn validate_level(level: &str) -> Result<(), ValidationError> {
    if level.chars().count() > MAX_LEVEL_LENGTH {
        return Err(invalid(
            "level_length",
            format!("level must be at most {MAX_LEVEL_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// URLs are bounded; format checking happens at creation time.
pub fn validate_url_length(url: &str) -> Result<(), ValidationError> {
    if url.chars().count() > MAX_URL_LENGTH {
        return Err(invalid(
            "url_length",
            format!("url must be at most {MAX_URL_LENGTH} characters"),
        ));
    }
    Ok(())
}

/// Units must fall inside [`UNITS_RANGE`].
pub fn validate_units(units: f64) -> Result<(), ValidationError> {
    let (min, max) = UNITS_RANGE;
    if units < min || units > max {
        return Err(invalid(
            "units_range",
            format!("units must be a number between {min} and {max}"),
        ));
    }
    Ok(())
}

/// Error reported when a partial-update body carries no updatable field.
pub fn at_least_one_field() -> ValidationError {
    invalid(
        "at_least_one_field",
        "at least one updatable field must be supplied".into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reasonable_titles() {
        assert!(validate_title("Shooting Team").is_ok());
        assert!(validate_title("a").is_ok());
    }

    #[test]
    fn rejects_blank_titles() {
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn rejects_overlong_titles() {
        assert!(validate_title(&"x".repeat(64)).is_ok());
        assert!(validate_title(&"x".repeat(65)).is_err());
    }

    #[test]
    fn bounds_game_ids() {
        assert!(validate_game_id("OPEN-01").is_ok());
        assert!(validate_game_id("").is_err());
        assert!(validate_game_id(&"g".repeat(17)).is_err());
    }

    #[test]
    fn bounds_units() {
        assert!(validate_units(0.5).is_ok());
        assert!(validate_units(100.0).is_ok());
        assert!(validate_units(0.25).is_err());
        assert!(validate_units(100.5).is_err());
    }
}

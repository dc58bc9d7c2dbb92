//! Slug derivation for team titles.

/// Longest slug we derive; matches the title length bound.
const MAX_SLUG_LENGTH: usize = 64;

/// Generate a URL-safe slug from a title.
///
/// Lowercases the title, replaces runs of non-alphanumeric characters with a
/// single dash, and trims leading/trailing dashes. A title without any
/// alphanumeric character yields an empty slug, which callers must reject.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    let truncated: String = slug
        .trim_end_matches('-')
        .chars()
        .take(MAX_SLUG_LENGTH)
        .collect();
    truncated.trim_end_matches('-').to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_dashed_lowercase_slugs() {
        assert_eq!(slugify("Shooting Team"), "shooting-team");
        assert_eq!(slugify("Chess  Club 2026"), "chess-club-2026");
    }

    #[test]
    fn collapses_and_trims_punctuation() {
        assert_eq!(slugify("---dashes---"), "dashes");
        assert_eq!(slugify("Hello, World!"), "hello-world");
    }

    #[test]
    fn titles_without_alphanumerics_yield_empty_slugs() {
        assert_eq!(slugify("!!!"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn bounds_slug_length() {
        let slug = slugify(&"a".repeat(100));
        assert_eq!(slug.len(), MAX_SLUG_LENGTH);
    }

    #[test]
    fn is_stable_for_a_given_title() {
        assert_eq!(slugify("Shooting Team"), slugify("Shooting Team"));
    }
}

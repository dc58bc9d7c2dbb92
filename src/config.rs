//! Environment-driven application configuration.

use std::env;

use thiserror::Error;
use tracing::warn;

/// Environment variable naming the PostgreSQL connection string.
const DATABASE_URL_ENV: &str = "DATABASE_URL";
/// Environment variable overriding the listen port.
const PORT_ENV: &str = "PORT";
/// Environment variable overriding the pool size.
const MAX_CONNECTIONS_ENV: &str = "DATABASE_MAX_CONNECTIONS";

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Error raised when required configuration is missing.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing required environment variable `{0}`")]
    MissingVar(&'static str),
}

#[derive(Clone, Debug)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl AppConfig {
    /// Load the configuration from the environment. A missing `DATABASE_URL`
    /// is fatal; the remaining values fall back to defaults with a warning
    /// when present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = env::var(DATABASE_URL_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or(ConfigError::MissingVar(DATABASE_URL_ENV))?;

        let port = parse_or_default(PORT_ENV, env::var(PORT_ENV).ok(), DEFAULT_PORT);
        let max_connections = parse_or_default(
            MAX_CONNECTIONS_ENV,
            env::var(MAX_CONNECTIONS_ENV).ok(),
            DEFAULT_MAX_CONNECTIONS,
        );

        Ok(Self {
            database_url,
            port,
            max_connections,
        })
    }
}

/// Parse an optional environment value, warning and falling back to the
/// default when it is present but invalid.
fn parse_or_default<T>(name: &str, value: Option<String>, default: T) -> T
where
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match value {
        None => default,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(name, value = %raw, %default, "invalid value; falling back to default");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_values_fall_back() {
        assert_eq!(parse_or_default("PORT", None, 8080u16), 8080);
    }

    #[test]
    fn parsable_values_are_used() {
        assert_eq!(parse_or_default("PORT", Some("3000".into()), 8080u16), 3000);
    }

    #[test]
    fn unparsable_values_fall_back() {
        assert_eq!(
            parse_or_default("PORT", Some("not-a-port".into()), 8080u16),
            8080
        );
    }
}

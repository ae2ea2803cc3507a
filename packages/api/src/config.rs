//! Server configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DATABASE_URL` | required | PostgreSQL connection string |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | Pool size |
//! | `SESSION_SECURE` | `false` | Mark the session cookie `Secure` (set behind HTTPS) |
//! | `SESSION_DAYS` | `7` | Session lifetime after the last request |
//!
//! `.env` is loaded with `dotenvy` before reading, so local development only
//! needs that file.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub session_secure: bool,
    pub session_days: u32,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    #[cfg(feature = "server")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = parse(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(Self {
            database_url,
            max_connections,
            session_secure: parse(&lookup, "SESSION_SECURE", false)?,
            session_days: parse(&lookup, "SESSION_DAYS", 7)?,
        })
    }

    pub fn session_inactivity_secs(&self) -> u64 {
        u64::from(self.session_days) * 24 * 60 * 60
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        None => Ok(default),
        Some(value) if value.trim().is_empty() => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(env(&[("DATABASE_URL", "postgres://localhost/care")]))
            .unwrap();
        assert_eq!(config.max_connections, 5);
        assert!(!config.session_secure);
        assert_eq!(config.session_days, 7);
        assert_eq!(config.session_inactivity_secs(), 60 * 60 * 24 * 7);
    }

    #[test]
    fn test_missing_database_url() {
        assert_eq!(
            ServerConfig::from_lookup(env(&[])),
            Err(ConfigError::Missing("DATABASE_URL"))
        );
    }

    #[test]
    fn test_overrides_and_invalid_values() {
        let config = ServerConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgres://db/care"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("SESSION_SECURE", "true"),
            ("SESSION_DAYS", "30"),
        ]))
        .unwrap();
        assert_eq!(config.max_connections, 20);
        assert!(config.session_secure);
        assert_eq!(config.session_days, 30);

        let err = ServerConfig::from_lookup(env(&[
            ("DATABASE_URL", "postgres://db/care"),
            ("SESSION_SECURE", "yes"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "SESSION_SECURE", .. }));
    }
}

//! Process configuration, read once at startup from the environment.
//!
//! Variables are read without a prefix, so `DATABASE_URL`, `DATABASE_NAME`
//! and `PORT` map directly onto [`Settings`]. A `.env` file in the working
//! directory is loaded first if present.

use std::net::{Ipv4Addr, SocketAddr};

use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// MongoDB connection string
    #[serde(default)]
    pub database_url: Option<String>,

    /// Name of the database holding the collections
    #[serde(default)]
    pub database_name: Option<String>,

    /// Listen port, always bound on all interfaces
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: None,
            database_name: None,
            port: default_port(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed, e.g. a non-numeric `PORT`.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_environment(Self::environment())
    }

    // Empty variables are skipped so `PORT=` falls back to the default.
    fn environment() -> config::Environment {
        config::Environment::default().ignore_empty(true)
    }

    fn from_environment(environment: config::Environment) -> Result<Self, ConfigError> {
        let settings: Settings = config::Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        Ok(settings.normalized())
    }

    // An empty variable counts as unset.
    fn normalized(self) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        Self {
            database_url: non_empty(self.database_url),
            database_name: non_empty(self.database_name),
            port: self.port,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Both values needed to reach the database, if both are configured.
    pub fn database(&self) -> Option<(&str, &str)> {
        match (self.database_url.as_deref(), self.database_name.as_deref()) {
            (Some(url), Some(name)) => Some((url, name)),
            _ => None,
        }
    }

    pub fn database_url_set(&self) -> bool {
        self.database_url.is_some()
    }

    pub fn database_name_set(&self) -> bool {
        self.database_name.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_from(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let mut source = config::Map::new();
        for (key, value) in vars {
            source.insert(key.to_string(), value.to_string());
        }
        Settings::from_environment(Settings::environment().source(Some(source)))
    }

    #[test]
    fn test_defaults_without_variables() {
        let settings = load_from(&[]).unwrap();

        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.database(), None);
        assert!(!settings.database_url_set());
        assert!(!settings.database_name_set());
        assert_eq!(settings.socket_addr().to_string(), "0.0.0.0:8000");
    }

    #[test]
    fn test_reads_database_and_port() {
        let settings = load_from(&[
            ("DATABASE_URL", "mongodb://localhost:27017"),
            ("DATABASE_NAME", "summit"),
            ("PORT", "3000"),
        ])
        .unwrap();

        assert_eq!(settings.port, 3000);
        assert_eq!(
            settings.database(),
            Some(("mongodb://localhost:27017", "summit"))
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let settings = load_from(&[("DATABASE_URL", ""), ("DATABASE_NAME", "summit")]).unwrap();

        assert!(!settings.database_url_set());
        assert!(settings.database_name_set());
        assert_eq!(settings.database(), None);
    }

    #[test]
    fn test_empty_port_uses_default() {
        let settings = load_from(&[("PORT", ""), ("DATABASE_NAME", "  ")]).unwrap();

        assert_eq!(settings.port, DEFAULT_PORT);
        assert!(!settings.database_name_set());
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        assert!(load_from(&[("PORT", "eighty")]).is_err());
    }
}

//! RON configuration for the mealmax binary

use mealmax_random::RandomOrgConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Default configuration file, read when present
pub const DEFAULT_CONFIG_PATH: &str = "mealmax.ron";

/// Database path that selects a throwaway in-memory store
pub const IN_MEMORY: &str = ":memory:";

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub random: RandomOrgConfig,
    /// Extra tracing directive, e.g. "mealmax_db=debug"
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Catalog storage settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Database file, or ":memory:"
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "mealmax.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the catalog lives only for this process
    pub fn is_in_memory(&self) -> bool {
        self.path == IN_MEMORY
    }
}

impl Config {
    /// Load configuration from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        ron::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the configuration for one run.
    ///
    /// An explicit path must exist. Without one, `mealmax.ron` is used when
    /// present and defaults otherwise. Environment overrides apply last.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides looked up by variable name.
    ///
    /// Variables:
    /// - `MEALMAX_DB_PATH` - database file or ":memory:"
    /// - `MEALMAX_RANDOM_URL` - random.org endpoint
    /// - `MEALMAX_RANDOM_TIMEOUT_MS` - request deadline
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("MEALMAX_DB_PATH") {
            self.database.path = path;
        }
        if let Some(url) = lookup("MEALMAX_RANDOM_URL") {
            self.random.url = url;
        }
        if let Some(timeout) = parse_var::<u64>(&lookup, "MEALMAX_RANDOM_TIMEOUT_MS")? {
            self.random.timeout_ms = timeout;
        }
        Ok(())
    }

    /// Reject settings that can never work
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Validation("database.path is empty".into()));
        }
        if self.random.url.trim().is_empty() {
            return Err(ConfigError::Validation("random.url is empty".into()));
        }
        if self.random.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "random.timeout_ms must be positive".into(),
            ));
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Validation(format!("{} has invalid value {:?}", key, raw))),
    }
}

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

//! Process configuration read from environment variables.
//!
//! | Variable              | Default  | Meaning                               |
//! |-----------------------|----------|---------------------------------------|
//! | `ROSTER_DATABASE_URL` | none     | `PostgreSQL` URL (`DATABASE_URL` too) |
//! | `ROSTER_POOL_SIZE`    | `4`      | Maximum pooled connections            |
//! | `ROSTER_LOG`          | `info`   | `tracing` filter directive            |
//! | `ROSTER_LOG_FORMAT`   | `pretty` | `pretty`, `compact`, or `json`        |

use std::str::FromStr;
use thiserror::Error;

const DATABASE_URL_VARS: [&str; 2] = ["ROSTER_DATABASE_URL", "DATABASE_URL"];
const POOL_SIZE_VAR: &str = "ROSTER_POOL_SIZE";
const LOG_FILTER_VAR: &str = "ROSTER_LOG";
const LOG_FORMAT_VAR: &str = "ROSTER_LOG_FORMAT";

const DEFAULT_POOL_SIZE: u32 = 4;
const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No database URL was provided.
    #[error("database URL missing, set ROSTER_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,

    /// The pool size is not a positive integer.
    #[error("invalid ROSTER_POOL_SIZE value '{0}', expected a positive integer")]
    InvalidPoolSize(String),

    /// The log format is not recognised.
    #[error("unsupported log format '{0}', expected pretty, compact, or json")]
    InvalidLogFormat(String),
}

/// Output style for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Multi-line human-readable output.
    #[default]
    Pretty,
    /// Single-line human-readable output.
    Compact,
    /// Newline-delimited JSON.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(value.to_owned())),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `tracing` filter directive, for example `roster=debug`.
    pub filter: String,
    /// Output style.
    pub format: LogFormat,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_owned(),
            format: LogFormat::default(),
        }
    }
}

/// Roster process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Maximum number of pooled connections.
    pub pool_max_size: u32,
    /// Logging settings.
    pub log: LogSettings,
}

impl RosterConfig {
    /// Reads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is missing or malformed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = DATABASE_URL_VARS
            .iter()
            .copied()
            .find_map(|key| non_empty(key))
            .ok_or(ConfigError::MissingDatabaseUrl)?;

        let pool_max_size = match non_empty(POOL_SIZE_VAR) {
            Some(raw) => parse_pool_size(&raw)?,
            None => DEFAULT_POOL_SIZE,
        };

        let format = match non_empty(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let filter = non_empty(LOG_FILTER_VAR).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            pool_max_size,
            log: LogSettings { filter, format },
        })
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|size| *size > 0)
        .ok_or_else(|| ConfigError::InvalidPoolSize(raw.to_owned()))
}

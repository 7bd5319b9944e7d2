//! Environment configuration for the `staffnet` binary.
//!
//! Values are read from the process environment after loading an optional
//! `.env` file from the working directory.

use std::env;
use thiserror::Error;

/// Environment variable holding the `PostgreSQL` connection URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "STAFFNET_DB_POOL_SIZE";
/// Environment variable holding the default log filter.
pub const LOG_FILTER_VAR: &str = "STAFFNET_LOG";

const DEFAULT_POOL_SIZE: u32 = 4;
const MAX_POOL_SIZE: u32 = 64;
const DEFAULT_LOG_FILTER: &str = "staffnet=info";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is not set.
    #[error("missing required environment variable {0}")]
    MissingEnvVar(&'static str),

    /// A variable is set to an unusable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Name of the offending variable.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffNetConfig {
    database_url: String,
    pool_size: u32,
    log_filter: String,
}

impl StaffNetConfig {
    /// Loads `.env` (if present) and reads the configuration from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `DATABASE_URL` is unset
    /// and [`ConfigError::InvalidValue`] when the pool size is not an
    /// integer in `1..=64`.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case outside development.
        let _loaded = dotenvy::dotenv();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`StaffNetConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingEnvVar(DATABASE_URL_VAR))?;
        let pool_size = lookup(POOL_SIZE_VAR)
            .map_or(Ok(DEFAULT_POOL_SIZE), |raw| parse_pool_size(&raw))?;
        let log_filter = lookup(LOG_FILTER_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_owned());

        Ok(Self {
            database_url,
            pool_size,
            log_filter,
        })
    }

    /// Returns the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Returns the default log filter directive.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_pool_size(raw: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        name: POOL_SIZE_VAR,
        reason,
    };
    let size: u32 = raw
        .trim()
        .parse()
        .map_err(|err: std::num::ParseIntError| invalid(err.to_string()))?;
    if !(1..=MAX_POOL_SIZE).contains(&size) {
        return Err(invalid(format!("must be between 1 and {MAX_POOL_SIZE}")));
    }
    Ok(size)
}

//! Runtime configuration.
//!
//! Settings come from an optional TOML file, then `DISPATCH_*` environment
//! variables override individual keys:
//!
//! ```toml
//! [database]
//! url = "postgres://dispatch@localhost/dispatch"
//! max_connections = 4
//!
//! [site]
//! utc_offset = "-05:00"
//!
//! [logging]
//! filter = "info,dispatchboard=debug"
//! ```

use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Overrides `database.url`.
pub const DATABASE_URL_VAR: &str = "DISPATCH_DATABASE_URL";
/// Overrides `site.utc_offset`.
pub const UTC_OFFSET_VAR: &str = "DISPATCH_UTC_OFFSET";
/// Overrides `logging.filter`.
pub const LOG_FILTER_VAR: &str = "DISPATCH_LOG";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config at {path}: {source}")]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The configuration file is not valid TOML for [`DispatchConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// `site.utc_offset` is not of the form `+HH:MM`.
    #[error("invalid UTC offset '{0}', expected e.g. -05:00")]
    InvalidOffset(String),
    /// A database operation was requested without `database.url`.
    #[error("database.url is not set (use {DATABASE_URL_VAR} or the config file)")]
    MissingDatabaseUrl,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Site-local settings.
    pub site: SiteConfig,
    /// Log filtering.
    pub logging: LoggingConfig,
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection URL.
    pub url: Option<String>,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: 4,
        }
    }
}

/// Site-local settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Offset of site time from UTC, e.g. `-05:00`.
    pub utc_offset: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            utc_offset: "+00:00".to_owned(),
        }
    }
}

/// Log filtering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

impl DispatchConfig {
    /// Loads configuration from `path` (if given) and the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] or [`ConfigError::Parse`] for a bad
    /// file, and [`ConfigError::InvalidOffset`] when the resulting offset
    /// does not parse.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(file) => {
                let contents =
                    std::fs::read_to_string(file).map_err(|source| ConfigError::Read {
                        path: file.to_path_buf(),
                        source,
                    })?;
                Self::from_toml_str(&contents)?
            }
            None => Self::default(),
        };
        config.apply_overrides(std::env::vars());
        config.offset()?;
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `DISPATCH_*` overrides from `vars`. Other variables are
    /// ignored, as are empty values.
    pub fn apply_overrides<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, raw) in vars {
            let value: String = raw.into();
            if value.trim().is_empty() {
                continue;
            }
            match key.as_ref() {
                DATABASE_URL_VAR => self.database.url = Some(value),
                UTC_OFFSET_VAR => self.site.utc_offset = value,
                LOG_FILTER_VAR => self.logging.filter = value,
                _ => {}
            }
        }
    }

    /// Returns the parsed site offset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] when `site.utc_offset` does
    /// not parse.
    pub fn offset(&self) -> Result<FixedOffset, ConfigError> {
        let raw = self.site.utc_offset.trim();
        raw.parse::<FixedOffset>()
            .map_err(|_| ConfigError::InvalidOffset(raw.to_owned()))
    }

    /// Returns the configured database URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDatabaseUrl`] when none is set.
    pub fn database_url(&self) -> Result<&str, ConfigError> {
        self.database
            .url
            .as_deref()
            .ok_or(ConfigError::MissingDatabaseUrl)
    }
}

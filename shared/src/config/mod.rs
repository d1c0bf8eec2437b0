//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `database` - Database connection and pool configuration
//! - `server` - HTTP server bind configuration
//!
//! Every required variable must be present at startup. Loading fails fast
//! with a [`ConfigError`] naming the first missing or invalid variable.

pub mod auth;
pub mod database;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

pub use auth::JwtConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is not set")]
    MissingVar(String),

    #[error("Environment variable {name} has an invalid value: {reason}")]
    InvalidVar { name: String, reason: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Token signing configuration
    pub auth: JwtConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file should be loaded by the caller beforehand if desired.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Required: `DB_HOST`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_PORT`,
    /// `JWT_SECRET`, `SERVER_PORT`.
    /// Optional: `SERVER_HOST`, `DB_MAX_CONNECTIONS`, `JWT_TOKEN_TTL_HOURS`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = VarReader { lookup };

        let database = DatabaseConfig {
            host: vars.required("DB_HOST")?,
            port: vars.required_parsed("DB_PORT")?,
            user: vars.required("DB_USER")?,
            password: vars.required("DB_PASSWORD")?,
            name: vars.required("DB_NAME")?,
            max_connections: vars
                .optional_parsed("DB_MAX_CONNECTIONS")?
                .unwrap_or(database::DEFAULT_MAX_CONNECTIONS),
            ..Default::default()
        };

        let mut auth = JwtConfig::new(vars.required("JWT_SECRET")?);
        if let Some(hours) = vars.optional_parsed("JWT_TOKEN_TTL_HOURS")? {
            auth.token_ttl_hours = hours;
        }

        let server = ServerConfig::new(
            vars.optional("SERVER_HOST")
                .unwrap_or_else(|| server::DEFAULT_HOST.to_string()),
            vars.required_parsed("SERVER_PORT")?,
        );

        Ok(Self {
            server,
            database,
            auth,
        })
    }
}

struct VarReader<F> {
    lookup: F,
}

impl<F> VarReader<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name)
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
    }

    fn required_parsed<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self.required(name)?;
        parse_var(name, &raw)
    }

    fn optional_parsed<T>(&self, name: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(raw) => parse_var(name, &raw).map(Some),
            None => Ok(None),
        }
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

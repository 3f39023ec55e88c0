//! Environment-driven server configuration.

use std::str::FromStr;

use crate::server::error::config::ConfigError;

/// Database used when `DATABASE_URL` is unset.
pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db?mode=rwc";
/// Address the HTTP listener binds to when `HOST` is unset.
pub static DEFAULT_HOST: &str = "0.0.0.0";
/// Port the HTTP listener binds to when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;
/// User favorites operations act on when `FAVORITES_USER_ID` is unset.
pub const DEFAULT_FAVORITES_USER_ID: i32 = 1;

/// Server configuration loaded from environment variables.
#[derive(Clone, Debug)]
pub struct Config {
    /// Connection string for postgres or sqlite.
    pub database_url: String,
    /// Address the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// ID of the user whose favorites the API manages.
    pub favorites_user_id: i32,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Every variable is optional and falls back to its `DEFAULT_*` value.
    ///
    /// # Returns
    /// - `Ok(Config)` - All present variables parsed
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is present but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            host: env_or("HOST", DEFAULT_HOST),
            port: parse_env("PORT", DEFAULT_PORT)?,
            favorites_user_id: parse_env("FAVORITES_USER_ID", DEFAULT_FAVORITES_USER_ID)?,
        })
    }

    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(var: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(var) {
        Ok(raw) => parse_value(var, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

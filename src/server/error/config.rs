//! Configuration errors raised while reading environment variables.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

/// Environment configuration could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed into its expected type.
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue {
        /// Name of the offending variable.
        var: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

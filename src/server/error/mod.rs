//! Error types for the holonet server application.
//!
//! Domain errors (configuration, missing records, favorite state conflicts) and external
//! library errors are aggregated into [`Error`]. Every error implements `IntoResponse` so
//! handlers can return `Result<_, Error>` and let `?` pick the HTTP status.

pub mod config;
pub mod favorite;
pub mod not_found;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, favorite::FavoriteError, not_found::NotFoundError},
};

/// Main error type for the holonet server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert via `?`.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Missing records (user, planet, character)
/// - Favorite state conflicts (already favorited, not favorited)
/// - External library errors (database, password hashing, IO)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A requested record does not exist.
    #[error(transparent)]
    NotFoundError(#[from] NotFoundError),
    /// Favorite state does not allow the requested change.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Password hashing failed.
    #[error("Failed to hash password: {0}")]
    PasswordHashError(argon2::password_hash::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error (binding or serving the HTTP listener).
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err)
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Favorite state conflicts
/// - 404 Not Found - Missing user, planet, or character
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::NotFoundError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

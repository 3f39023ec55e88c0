//! Missing records, reported as 404 Not Found.
//!
//! The client facing message names the entity the public API uses, so characters are
//! reported as people.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// A record addressed by a request does not exist.
#[derive(Error, Debug)]
pub enum NotFoundError {
    /// User does not exist.
    #[error("User ID {0} not found in database")]
    User(i32),
    /// Planet does not exist.
    #[error("Planet ID {0} not found in database")]
    Planet(i32),
    /// Character does not exist.
    #[error("Character ID {0} not found in database")]
    Character(i32),
}

impl NotFoundError {
    /// Client facing message, characters are called people in the public API
    fn message(&self) -> &'static str {
        match self {
            Self::User(_) => "User not found",
            Self::Planet(_) => "Planet not found",
            Self::Character(_) => "Person not found",
        }
    }
}

impl IntoResponse for NotFoundError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        (
            StatusCode::NOT_FOUND,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

//! Favorite state conflicts, reported as 400 Bad Request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Requested favorite change conflicts with the current favorite state.
#[derive(Error, Debug)]
pub enum FavoriteError {
    /// Planet is already one of the acting user's favorites.
    #[error("Planet ID {0} is already a favorite")]
    PlanetAlreadyFavorited(i32),
    /// Planet is not one of the acting user's favorites.
    #[error("Planet ID {0} is not a favorite")]
    PlanetNotFavorited(i32),
    /// Character is already one of the acting user's favorites.
    #[error("Character ID {0} is already a favorite")]
    CharacterAlreadyFavorited(i32),
    /// Character is not one of the acting user's favorites.
    #[error("Character ID {0} is not a favorite")]
    CharacterNotFavorited(i32),
}

impl FavoriteError {
    fn message(&self) -> &'static str {
        match self {
            Self::PlanetAlreadyFavorited(_) => "Planet already in favorites",
            Self::PlanetNotFavorited(_) => "Planet not in favorites",
            Self::CharacterAlreadyFavorited(_) => "Person already in favorites",
            Self::CharacterNotFavorited(_) => "Person not in favorites",
        }
    }
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("Favorite error: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.message().to_string(),
            }),
        )
            .into_response()
    }
}

//! Character endpoints, exposed under `/people`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, character::CharacterDto},
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::character::CharacterService,
    },
};

/// OpenAPI tag for character routes
pub static CHARACTER_TAG: &str = "people";

/// Get all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = CHARACTER_TAG,
    responses(
        (status = 200, description = "Success when retrieving characters", body = Vec<CharacterDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_characters(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let characters = character_service.get_characters().await?;

    Ok((StatusCode::OK, Json(characters)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/people/{people_id}",
    tag = CHARACTER_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "Success when retrieving the character", body = CharacterDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_character(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let character_service = CharacterService::new(&state.db);

    let character = character_service
        .get_character(people_id)
        .await?
        .ok_or(NotFoundError::Character(people_id))?;

    Ok((StatusCode::OK, Json(character)))
}

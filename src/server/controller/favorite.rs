//! Endpoints adding and removing favorites of the acting user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::{error::Error, model::app::AppState, service::favorite::FavoriteService},
};

/// OpenAPI tag for favorite routes
pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = MessageDto),
        (status = 400, description = "Planet already in favorites", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, state.favorites_user_id);

    favorite_service.add_planet(planet_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Planet added to favorites")),
    ))
}

/// Remove a planet from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 400, description = "Planet not in favorites", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, state.favorites_user_id);

    favorite_service.remove_planet(planet_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Planet removed from favorites")),
    ))
}

/// Add a character to the acting user's favorites
#[utoipa::path(
    post,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 201, description = "Person added to favorites", body = MessageDto),
        (status = 400, description = "Person already in favorites", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_character(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, state.favorites_user_id);

    favorite_service.add_character(people_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Person added to favorites")),
    ))
}

/// Remove a character from the acting user's favorites
#[utoipa::path(
    delete,
    path = "/favorite/people/{people_id}",
    tag = FAVORITE_TAG,
    params(
        ("people_id" = i32, Path, description = "ID of the character")
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageDto),
        (status = 400, description = "Person not in favorites", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_character(
    State(state): State<AppState>,
    Path(people_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorite_service = FavoriteService::new(&state.db, state.favorites_user_id);

    favorite_service.remove_character(people_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Person removed from favorites")),
    ))
}

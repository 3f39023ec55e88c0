//! Planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, planet::PlanetDto},
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::planet::PlanetService,
    },
};

/// OpenAPI tag for planet routes
pub static PLANET_TAG: &str = "planet";

/// Get all planets with their residents
#[utoipa::path(
    get,
    path = "/planets",
    tag = PLANET_TAG,
    responses(
        (status = 200, description = "Success when retrieving planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planets = planet_service.get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet with its residents
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = PLANET_TAG,
    params(
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet_service = PlanetService::new(&state.db);

    let planet = planet_service
        .get_planet(planet_id)
        .await?
        .ok_or(NotFoundError::Planet(planet_id))?;

    Ok((StatusCode::OK, Json(planet)))
}

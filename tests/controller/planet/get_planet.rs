use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{model::planet::PlanetDto, server::controller::planet::get_planet};

use super::*;

/// Expect 200 with the requested planet
#[tokio::test]
async fn success_for_existing_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Naboo")
        .with_mock_planet("Coruscant")
        .build()
        .await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), Path(2)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planet: PlanetDto = body_json(resp).await;
    assert_eq!(planet.id, 2);
    assert_eq!(planet.name, "Coruscant");

    Ok(())
}

/// Expect 404 for a planet ID that does not exist
#[tokio::test]
async fn error_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = get_planet(State(test.to_app_state::<AppState>()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Planet not found");

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{model::planet::PlanetDto, server::controller::planet::get_planets};

use super::*;

/// Expect 200 with every planet and its residents
#[tokio::test]
async fn success_with_residents() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Tatooine")
        .with_mock_planet("Dagobah")
        .with_mock_character("Luke Skywalker", Some(1))
        .with_mock_character("Owen Lars", Some(1))
        .build()
        .await?;

    let result = get_planets(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = body_json(resp).await;
    assert_eq!(planets.len(), 2);
    assert_eq!(planets[0].residents.len(), 2);
    assert!(planets[1].residents.is_empty());

    Ok(())
}

/// Expect the public JSON field names
#[tokio::test]
async fn success_uses_public_field_names() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Tatooine")
        .with_mock_character("Luke Skywalker", Some(1))
        .build()
        .await?;

    let resp = get_planets(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    let body: serde_json::Value = body_json(resp).await;
    let planet = &body[0];
    assert_eq!(planet["id"], 1);
    assert_eq!(planet["nombre"], "Tatooine");
    assert!(planet.get("clima").is_some());
    assert!(planet.get("dimension").is_some());
    let resident = &planet["residentes"][0];
    assert_eq!(resident["nombre"], "Luke Skywalker");
    assert_eq!(resident["planeta_id"], 1);
    assert_eq!(resident["planeta_nombre"], "Tatooine");

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{model::user::FavoritesDto, server::controller::user::get_favorites};

use super::*;

/// Expect 200 with the acting user's planets & people
#[tokio::test]
async fn success_with_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user()
        .with_mock_user()
        .with_mock_planet("Mustafar")
        .with_mock_planet("Bespin")
        .with_mock_character("Lando Calrissian", Some(2))
        .with_favorite_planet(1, 1)
        .with_favorite_planet(2, 2)
        .with_favorite_character(1, 1)
        .build()
        .await?;

    let result = get_favorites(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: FavoritesDto = body_json(resp).await;
    assert_eq!(favorites.planets.len(), 1);
    assert_eq!(favorites.planets[0].name, "Mustafar");
    assert_eq!(favorites.people.len(), 1);
    assert_eq!(favorites.people[0].planet_name.as_deref(), Some("Bespin"));

    Ok(())
}

/// Expect 200 with empty lists when nothing is favorited
#[tokio::test]
async fn success_with_no_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user()
        .build()
        .await?;

    let resp = get_favorites(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["planets"], serde_json::json!([]));
    assert_eq!(body["people"], serde_json::json!([]));

    Ok(())
}

/// Expect 404 when the acting user does not exist
#[tokio::test]
async fn error_when_user_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = get_favorites(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{model::character::CharacterDto, server::controller::character::get_characters};

use super::*;

/// Expect 200 with every character and its native planet name
#[tokio::test]
async fn success_with_planet_names() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Kashyyyk")
        .with_mock_character("Chewbacca", Some(1))
        .with_mock_character("C-3PO", None)
        .build()
        .await?;

    let result = get_characters(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let characters: Vec<CharacterDto> = body_json(resp).await;
    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].planet_name.as_deref(), Some("Kashyyyk"));
    assert!(characters[1].planet_id.is_none());
    assert!(characters[1].planet_name.is_none());

    Ok(())
}

/// Expect a null planet name once the native planet is deleted
#[tokio::test]
async fn success_after_native_planet_deleted() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Alderaan")
        .with_mock_character("Leia Organa", Some(1))
        .build()
        .await?;

    test.planet().delete_planet(1).await?;

    let resp = get_characters(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body[0]["nombre"], "Leia Organa");
    assert!(body[0]["planeta_id"].is_null());
    assert!(body[0]["planeta_nombre"].is_null());

    Ok(())
}

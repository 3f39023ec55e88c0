use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{model::character::CharacterDto, server::controller::character::get_character};

use super::*;

/// Expect 200 with the requested character
#[tokio::test]
async fn success_for_existing_character() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_planet("Stewjon")
        .with_mock_character("Obi-Wan Kenobi", Some(1))
        .build()
        .await?;

    let result = get_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let character: CharacterDto = body_json(resp).await;
    assert_eq!(character.name, "Obi-Wan Kenobi");
    assert_eq!(character.planet_name.as_deref(), Some("Stewjon"));

    Ok(())
}

/// Expect 404 for a character ID that does not exist
#[tokio::test]
async fn error_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = get_character(State(test.to_app_state::<AppState>()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::favorite::add_favorite_character;

use super::*;

/// Expect 201 with a confirmation message
#[tokio::test]
async fn success_adds_character() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;

    let result = add_favorite_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Person added to favorites");

    Ok(())
}

/// Expect 201 then 400 when adding the same character twice
#[tokio::test]
async fn error_when_added_twice() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;

    let first = add_favorite_character(State(test.to_app_state::<AppState>()), Path(1))
        .await
        .unwrap()
        .into_response();
    let second = add_favorite_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert_eq!(first.status(), StatusCode::CREATED);
    assert!(second.is_err());
    let resp = second.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Person already in favorites");

    Ok(())
}

/// Expect 404 for a character ID that does not exist
#[tokio::test]
async fn error_for_nonexistent_character() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;

    let result = add_favorite_character(State(test.to_app_state::<AppState>()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Person not found");

    Ok(())
}

/// Expect 404 for the user before checking the character
#[tokio::test]
async fn error_when_acting_user_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = add_favorite_character(State(test.to_app_state::<AppState>()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "User not found");

    Ok(())
}

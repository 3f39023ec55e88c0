use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::server::controller::favorite::remove_favorite_character;

use super::*;

/// Expect 200 with a confirmation message
#[tokio::test]
async fn success_removes_character() -> Result<(), TestError> {
    let test = favorites_builder().with_favorite_character(1, 1).build().await?;

    let result = remove_favorite_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "Person removed from favorites");

    Ok(())
}

/// Expect 400 when the character was never favorited
#[tokio::test]
async fn error_when_not_favorited() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;

    let result = remove_favorite_character(State(test.to_app_state::<AppState>()), Path(1)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Person not in favorites");

    Ok(())
}

/// Expect 404 for a character ID that does not exist
#[tokio::test]
async fn error_for_nonexistent_character() -> Result<(), TestError> {
    let test = favorites_builder().with_favorite_character(1, 1).build().await?;

    let result = remove_favorite_character(State(test.to_app_state::<AppState>()), Path(999)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

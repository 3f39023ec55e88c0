use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use holonet::{
    model::user::{CreateUserDto, UserDto},
    server::controller::user::{create_user, get_users},
};

use super::*;

fn new_user(email: &str) -> CreateUserDto {
    CreateUserDto {
        email: email.to_string(),
        password: "it's a trap".to_string(),
        name: Some("Ackbar".to_string()),
        is_active: true,
    }
}

/// Expect 201 with the created user and no password in the body
#[tokio::test]
async fn success_creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        Json(new_user("ackbar@example.com")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["email"], "ackbar@example.com");
    assert_eq!(body["nombre"], "Ackbar");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    Ok(())
}

/// Expect the created user to be listed exactly once
#[tokio::test]
async fn created_user_is_listed_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user()
        .build()
        .await?;

    create_user(
        State(test.to_app_state::<AppState>()),
        Json(new_user("mothma@example.com")),
    )
    .await
    .unwrap();

    let resp = get_users(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();
    let users: Vec<UserDto> = body_json(resp).await;

    let matching = users
        .iter()
        .filter(|u| u.email == "mothma@example.com")
        .count();
    assert_eq!(users.len(), 2);
    assert_eq!(matching, 1);

    Ok(())
}

/// Expect 500 when the email is already taken
#[tokio::test]
async fn error_for_duplicate_email() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_favorite_tables().build().await?;
    test.user().insert_user("ackbar@example.com").await?;

    let result = create_user(
        State(test.to_app_state::<AppState>()),
        Json(new_user("ackbar@example.com")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["error"], "Internal server error");

    Ok(())
}

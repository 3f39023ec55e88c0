use axum::{extract::State, http::StatusCode, response::IntoResponse};
use holonet::{model::user::UserDto, server::controller::user::get_users};

use super::*;

/// Expect 200 with an empty list when there are no users
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = TestBuilder::new().with_favorite_tables().build().await?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert!(users.is_empty());

    Ok(())
}

/// Expect each user to carry their favorites with residents attached
#[tokio::test]
async fn success_with_embedded_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_favorite_tables()
        .with_mock_user()
        .with_mock_planet("Endor")
        .with_mock_character("Wicket", Some(1))
        .with_favorite_planet(1, 1)
        .with_favorite_character(1, 1)
        .build()
        .await?;

    let resp = get_users(State(test.to_app_state::<AppState>()))
        .await
        .unwrap()
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].email, "user1@example.com");
    assert_eq!(users[0].favorites.planets[0].name, "Endor");
    assert_eq!(users[0].favorites.planets[0].residents[0].name, "Wicket");
    assert_eq!(
        users[0].favorites.characters[0].planet_name.as_deref(),
        Some("Endor")
    );

    Ok(())
}

/// Expect 500 when the database tables are missing
#[tokio::test]
async fn error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = get_users(State(test.to_app_state::<AppState>())).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}

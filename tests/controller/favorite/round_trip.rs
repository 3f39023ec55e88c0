use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holonet::{
    model::user::FavoritesDto,
    server::controller::{
        favorite::{
            add_favorite_character, add_favorite_planet, remove_favorite_character,
            remove_favorite_planet,
        },
        user::get_favorites,
    },
};

use super::*;

async fn favorites(state: AppState) -> FavoritesDto {
    let resp = get_favorites(State(state)).await.unwrap().into_response();
    body_json(resp).await
}

/// Expect an added planet to be listed until it is removed
#[tokio::test]
async fn planet_listed_until_removed() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;
    let state: AppState = test.to_app_state();

    let added = add_favorite_planet(State(state.clone()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(added.status(), StatusCode::CREATED);

    let listed = favorites(state.clone()).await;
    assert_eq!(listed.planets.len(), 1);
    assert_eq!(listed.planets[0].name, "Yavin 4");

    let removed = remove_favorite_planet(State(state.clone()), Path(1))
        .await
        .unwrap()
        .into_response();
    assert_eq!(removed.status(), StatusCode::OK);

    let listed = favorites(state).await;
    assert!(listed.planets.is_empty());

    Ok(())
}

/// Expect an added character to be listed until it is removed
#[tokio::test]
async fn character_listed_until_removed() -> Result<(), TestError> {
    let test = favorites_builder().build().await?;
    let state: AppState = test.to_app_state();

    add_favorite_character(State(state.clone()), Path(1))
        .await
        .unwrap();

    let listed = favorites(state.clone()).await;
    assert_eq!(listed.people.len(), 1);
    assert_eq!(listed.people[0].name, "Jyn Erso");
    assert!(listed.people[0].planet_name.is_none());

    remove_favorite_character(State(state.clone()), Path(1))
        .await
        .unwrap();

    let listed = favorites(state).await;
    assert!(listed.people.is_empty());

    Ok(())
}

/// Expect a favorite planet to vanish when the planet is deleted
#[tokio::test]
async fn planet_dropped_when_deleted() -> Result<(), TestError> {
    let mut test = favorites_builder().with_favorite_planet(1, 1).build().await?;

    test.planet().delete_planet(1).await?;

    let listed = favorites(test.to_app_state()).await;
    assert!(listed.planets.is_empty());

    Ok(())
}

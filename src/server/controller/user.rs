//! User endpoints: list, create, and the acting user's favorites.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, FavoritesDto, UserDto},
    },
    server::{
        error::{not_found::NotFoundError, Error},
        model::app::AppState,
        service::user::UserService,
    },
};

/// OpenAPI tag for user routes
pub static USER_TAG: &str = "user";

/// Get all users with their favorites
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a new user
///
/// The password is hashed before it is stored and is never returned.
#[utoipa::path(
    post,
    path = "/user",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Success when creating a user", body = UserDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(new_user): Json<CreateUserDto>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.create_user(new_user).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the favorite planets & characters of the acting user
#[utoipa::path(
    get,
    path = "/users/favorites",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving favorites", body = FavoritesDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_favorites(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let favorites = user_service
        .get_favorites(state.favorites_user_id)
        .await?
        .ok_or(NotFoundError::User(state.favorites_user_id))?;

    Ok((StatusCode::OK, Json(favorites)))
}

use serde::{Deserialize, Serialize};

use crate::model::{character::CharacterDto, planet::PlanetDto};

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    pub email: String,
    pub is_active: bool,
    pub favorites: UserFavoritesDto,
}

/// Favorites embedded in a serialized user
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserFavoritesDto {
    pub planets: Vec<PlanetDto>,
    pub characters: Vec<CharacterDto>,
}

/// Response body of `GET /users/favorites`
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoritesDto {
    pub planets: Vec<PlanetDto>,
    pub people: Vec<CharacterDto>,
}

/// Request body of `POST /user`
#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: String,
    pub password: String,
    #[serde(default, rename = "nombre")]
    pub name: Option<String>,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_is_active() -> bool {
    true
}

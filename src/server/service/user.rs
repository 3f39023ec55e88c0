//! User service: listing, creation, and favorite retrieval.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::{
    model::{
        character::CharacterDto,
        planet::PlanetDto,
        user::{CreateUserDto, FavoritesDto, UserDto, UserFavoritesDto},
    },
    server::{
        data::{
            character::CharacterRepository, favorite::FavoriteRepository,
            planet::PlanetRepository, user::UserRepository,
        },
        error::Error,
        util::{
            password::hash_password,
            serialize::{character_with_planet_dto, planet_dto, user_dto},
        },
    },
};

/// Service for user accounts and their favorites.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user with their favorite planets and characters.
    ///
    /// Favorites are assembled from one query per table rather than per user.
    ///
    /// # Returns
    /// - `Ok(Vec<UserDto>)` - All users ordered by ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);
        let planet_repo = PlanetRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);
        let favorite_repo = FavoriteRepository::new(self.db);

        let users = user_repo.get_all().await?;

        let planets: HashMap<i32, PlanetDto> = planet_repo
            .get_all_with_residents()
            .await?
            .into_iter()
            .map(|(planet, residents)| (planet.id, planet_dto(planet, residents)))
            .collect();
        let characters: HashMap<i32, CharacterDto> = character_repo
            .get_all_with_planet()
            .await?
            .into_iter()
            .map(|row| (row.0.id, character_with_planet_dto(row)))
            .collect();

        let mut favorites: HashMap<i32, UserFavoritesDto> = HashMap::new();
        for favorite in favorite_repo.get_all_planets().await? {
            if let Some(planet) = planets.get(&favorite.planet_id) {
                favorites
                    .entry(favorite.user_id)
                    .or_default()
                    .planets
                    .push(planet.clone());
            }
        }
        for favorite in favorite_repo.get_all_characters().await? {
            if let Some(character) = characters.get(&favorite.character_id) {
                favorites
                    .entry(favorite.user_id)
                    .or_default()
                    .characters
                    .push(character.clone());
            }
        }

        let user_dtos = users
            .into_iter()
            .map(|user| {
                let user_favorites = favorites.remove(&user.id).unwrap_or_default();
                user_dto(user, user_favorites)
            })
            .collect();

        Ok(user_dtos)
    }

    /// Creates a new user, hashing the provided password before it is stored.
    ///
    /// # Arguments
    /// - `new_user` - Email, plaintext password, optional display name & active flag
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without favorites
    /// - `Err(Error::PasswordHashError)` - Password could not be hashed
    /// - `Err(Error::DbErr)` - Insert failed, e.g. the email is already registered
    pub async fn create_user(&self, new_user: CreateUserDto) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let password_hash = hash_password(&new_user.password)?;
        let user = user_repo
            .create(
                new_user.email,
                password_hash,
                new_user.name,
                new_user.is_active,
            )
            .await?;

        tracing::debug!(user_id = %user.id, "Created user");

        Ok(user_dto(user, UserFavoritesDto::default()))
    }

    /// Retrieves the favorite planets & characters of a user.
    ///
    /// # Returns
    /// - `Ok(Some(FavoritesDto))` - User found
    /// - `Ok(None)` - User not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_favorites(&self, user_id: i32) -> Result<Option<FavoritesDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.get_by_id(user_id).await?.is_none() {
            return Ok(None);
        }

        let favorites = self.get_user_favorites(user_id).await?;

        Ok(Some(FavoritesDto {
            planets: favorites.planets,
            people: favorites.characters,
        }))
    }

    async fn get_user_favorites(&self, user_id: i32) -> Result<UserFavoritesDto, Error> {
        let planet_repo = PlanetRepository::new(self.db);
        let character_repo = CharacterRepository::new(self.db);

        let planets = planet_repo
            .get_favorites_with_residents(user_id)
            .await?
            .into_iter()
            .map(|(planet, residents)| planet_dto(planet, residents))
            .collect();

        let characters = character_repo
            .get_favorites_with_planet(user_id)
            .await?
            .into_iter()
            .map(character_with_planet_dto)
            .collect();

        Ok(UserFavoritesDto {
            planets,
            characters,
        })
    }
}

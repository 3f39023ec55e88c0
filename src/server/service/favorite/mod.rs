//! Favorite planet & character service.
//!
//! Favorites belong to a single acting user chosen when the service is created. Every
//! operation first checks that the acting user and the target exist, then checks the
//! current favorite state before writing.

#[cfg(test)]
mod tests;

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::{
        character::CharacterRepository, favorite::FavoriteRepository, planet::PlanetRepository,
        user::UserRepository,
    },
    error::{favorite::FavoriteError, not_found::NotFoundError, Error},
};

/// Service for adding and removing the acting user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`] acting on behalf of `user_id`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self { db, user_id }
    }

    /// Adds a planet to the acting user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite added
    /// - `Err(Error::NotFoundError)` - Acting user or planet does not exist
    /// - `Err(Error::FavoriteError)` - Planet is already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_planet(&self, planet_id: i32) -> Result<(), Error> {
        self.require_user().await?;
        self.require_planet(planet_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo.has_planet(self.user_id, planet_id).await? {
            return Err(FavoriteError::PlanetAlreadyFavorited(planet_id).into());
        }

        match favorite_repo.add_planet(self.user_id, planet_id).await {
            Ok(_) => Ok(()),
            // Lost a race against a concurrent insert of the same pair
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::PlanetAlreadyFavorited(planet_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a planet from the acting user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::NotFoundError)` - Acting user or planet does not exist
    /// - `Err(Error::FavoriteError)` - Planet is not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_planet(&self, planet_id: i32) -> Result<(), Error> {
        self.require_user().await?;
        self.require_planet(planet_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let result = favorite_repo.remove_planet(self.user_id, planet_id).await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::PlanetNotFavorited(planet_id).into());
        }

        Ok(())
    }

    /// Adds a character to the acting user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite added
    /// - `Err(Error::NotFoundError)` - Acting user or character does not exist
    /// - `Err(Error::FavoriteError)` - Character is already a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_character(&self, character_id: i32) -> Result<(), Error> {
        self.require_user().await?;
        self.require_character(character_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        if favorite_repo
            .has_character(self.user_id, character_id)
            .await?
        {
            return Err(FavoriteError::CharacterAlreadyFavorited(character_id).into());
        }

        match favorite_repo.add_character(self.user_id, character_id).await {
            Ok(_) => Ok(()),
            Err(err) if is_unique_violation(&err) => {
                Err(FavoriteError::CharacterAlreadyFavorited(character_id).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Removes a character from the acting user's favorites.
    ///
    /// # Returns
    /// - `Ok(())` - Favorite removed
    /// - `Err(Error::NotFoundError)` - Acting user or character does not exist
    /// - `Err(Error::FavoriteError)` - Character is not a favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_character(&self, character_id: i32) -> Result<(), Error> {
        self.require_user().await?;
        self.require_character(character_id).await?;

        let favorite_repo = FavoriteRepository::new(self.db);
        let result = favorite_repo
            .remove_character(self.user_id, character_id)
            .await?;

        if result.rows_affected == 0 {
            return Err(FavoriteError::CharacterNotFavorited(character_id).into());
        }

        Ok(())
    }

    async fn require_user(&self) -> Result<(), Error> {
        let user_repo = UserRepository::new(self.db);

        match user_repo.get_by_id(self.user_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::User(self.user_id).into()),
        }
    }

    async fn require_planet(&self, planet_id: i32) -> Result<(), Error> {
        let planet_repo = PlanetRepository::new(self.db);

        match planet_repo.get_by_id(planet_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::Planet(planet_id).into()),
        }
    }

    async fn require_character(&self, character_id: i32) -> Result<(), Error> {
        let character_repo = CharacterRepository::new(self.db);

        match character_repo.get_by_id(character_id).await? {
            Some(_) => Ok(()),
            None => Err(NotFoundError::Character(character_id).into()),
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

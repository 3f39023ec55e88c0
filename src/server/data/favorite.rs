//! Favorite junction repository for planets and characters.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait, QueryOrder,
};

use crate::server::model::db::{FavoriteCharacterModel, FavoritePlanetModel};

/// Repository for the user favorite junction tables.
///
/// Each favorite is a `(user_id, target_id)` pair, the pair is the primary key so a
/// duplicate insert fails with a unique constraint violation.
pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Adds a planet to a user's favorites
    pub async fn add_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, DbErr> {
        let favorite = entity::user_favorite_planet::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite planet pair ordered by user then planet ID
    pub async fn get_all_planets(&self) -> Result<Vec<FavoritePlanetModel>, DbErr> {
        entity::prelude::UserFavoritePlanet::find()
            .order_by_asc(entity::user_favorite_planet::Column::UserId)
            .order_by_asc(entity::user_favorite_planet::Column::PlanetId)
            .all(self.db)
            .await
    }

    /// Checks whether a planet is one of a user's favorites
    pub async fn has_planet(&self, user_id: i32, planet_id: i32) -> Result<bool, DbErr> {
        let favorite = entity::prelude::UserFavoritePlanet::find_by_id((user_id, planet_id))
            .one(self.db)
            .await?;

        Ok(favorite.is_some())
    }

    /// Removes a planet from a user's favorites
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove_planet(&self, user_id: i32, planet_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavoritePlanet::delete_by_id((user_id, planet_id))
            .exec(self.db)
            .await
    }

    /// Adds a character to a user's favorites
    pub async fn add_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, DbErr> {
        let favorite = entity::user_favorite_character::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            character_id: ActiveValue::Set(character_id),
        };

        favorite.insert(self.db).await
    }

    /// Gets every favorite character pair ordered by user then character ID
    pub async fn get_all_characters(&self) -> Result<Vec<FavoriteCharacterModel>, DbErr> {
        entity::prelude::UserFavoriteCharacter::find()
            .order_by_asc(entity::user_favorite_character::Column::UserId)
            .order_by_asc(entity::user_favorite_character::Column::CharacterId)
            .all(self.db)
            .await
    }

    /// Checks whether a character is one of a user's favorites
    pub async fn has_character(&self, user_id: i32, character_id: i32) -> Result<bool, DbErr> {
        let favorite =
            entity::prelude::UserFavoriteCharacter::find_by_id((user_id, character_id))
                .one(self.db)
                .await?;

        Ok(favorite.is_some())
    }

    /// Removes a character from a user's favorites
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn remove_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::UserFavoriteCharacter::delete_by_id((user_id, character_id))
            .exec(self.db)
            .await
    }
}

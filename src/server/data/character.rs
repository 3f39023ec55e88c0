//! Character repository, native planet lookups are joined in the same query.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{CharacterModel, PlanetModel};

/// Repository for the `characters` table.
pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    /// Creates a new instance of [`CharacterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a character by ID, `None` if it does not exist
    pub async fn get_by_id(&self, character_id: i32) -> Result<Option<CharacterModel>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .one(self.db)
            .await
    }

    /// Gets a character along with its native planet, if any
    pub async fn get_with_planet(
        &self,
        character_id: i32,
    ) -> Result<Option<(CharacterModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Character::find_by_id(character_id)
            .find_also_related(entity::prelude::Planet)
            .one(self.db)
            .await
    }

    /// Gets all characters ordered by ID, each with its native planet
    pub async fn get_all_with_planet(
        &self,
    ) -> Result<Vec<(CharacterModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Character::find()
            .order_by_asc(entity::character::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await
    }

    /// Gets the characters favorited by a user ordered by ID, each with its native planet
    pub async fn get_favorites_with_planet(
        &self,
        user_id: i32,
    ) -> Result<Vec<(CharacterModel, Option<PlanetModel>)>, DbErr> {
        entity::prelude::Character::find()
            .inner_join(entity::prelude::UserFavoriteCharacter)
            .filter(entity::user_favorite_character::Column::UserId.eq(user_id))
            .order_by_asc(entity::character::Column::Id)
            .find_also_related(entity::prelude::Planet)
            .all(self.db)
            .await
    }
}

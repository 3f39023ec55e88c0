use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn favorite<'a>(&'a mut self) -> FavoriteFixtures<'a> {
        FavoriteFixtures { setup: self }
    }
}

pub struct FavoriteFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> FavoriteFixtures<'a> {
    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<entity::user_favorite_planet::Model, TestError> {
        Ok(entity::prelude::UserFavoritePlanet::insert(
            entity::user_favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<entity::user_favorite_character::Model, TestError> {
        Ok(entity::prelude::UserFavoriteCharacter::insert(
            entity::user_favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                character_id: ActiveValue::Set(character_id),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

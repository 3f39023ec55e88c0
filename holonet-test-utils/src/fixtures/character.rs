use sea_orm::{ActiveValue, DeleteResult, EntityTrait};

use crate::{constant::TEST_CHARACTER_SPECIES, error::TestError, TestContext};

impl TestContext {
    pub fn character<'a>(&'a mut self) -> CharacterFixtures<'a> {
        CharacterFixtures { setup: self }
    }
}

pub struct CharacterFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> CharacterFixtures<'a> {
    pub async fn insert_character(
        &self,
        name: &str,
        species: &str,
        planet_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                species: ActiveValue::Set(species.to_string()),
                planet_id: ActiveValue::Set(planet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a character of the test species.
    pub async fn insert_mock_character(
        &self,
        name: &str,
        planet_id: Option<i32>,
    ) -> Result<entity::character::Model, TestError> {
        self.insert_character(name, TEST_CHARACTER_SPECIES, planet_id)
            .await
    }

    pub async fn delete_character(&self, character_id: i32) -> Result<DeleteResult, TestError> {
        Ok(entity::prelude::Character::delete_by_id(character_id)
            .exec(&self.setup.db)
            .await?)
    }
}

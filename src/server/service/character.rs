//! Character read service.

use sea_orm::DatabaseConnection;

use crate::{
    model::character::CharacterDto,
    server::{
        data::character::CharacterRepository, error::Error,
        util::serialize::character_with_planet_dto,
    },
};

/// Service for reading characters.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all characters ordered by ID with their native planet name
    pub async fn get_characters(&self) -> Result<Vec<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let characters = character_repo
            .get_all_with_planet()
            .await?
            .into_iter()
            .map(character_with_planet_dto)
            .collect();

        Ok(characters)
    }

    /// Retrieves a character, `None` if the character does not exist
    pub async fn get_character(&self, character_id: i32) -> Result<Option<CharacterDto>, Error> {
        let character_repo = CharacterRepository::new(self.db);

        let character = character_repo
            .get_with_planet(character_id)
            .await?
            .map(character_with_planet_dto);

        Ok(character)
    }
}

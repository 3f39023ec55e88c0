//! Conversion of database models into API DTOs.
//!
//! A character's `planet_name` is a derived field, callers pass the native planet they
//! already loaded through a join instead of looking it up per character.

use crate::{
    model::{
        character::CharacterDto,
        planet::PlanetDto,
        user::{UserDto, UserFavoritesDto},
    },
    server::model::db::{CharacterModel, PlanetModel, UserModel},
};

/// Converts a character, `planet_name` is the name of its native planet if known
pub fn character_dto(character: CharacterModel, planet_name: Option<String>) -> CharacterDto {
    CharacterDto {
        id: character.id,
        name: character.name,
        species: character.species,
        planet_id: character.planet_id,
        planet_name,
    }
}

/// Converts a `find_also_related` row of character and native planet
pub fn character_with_planet_dto(
    (character, planet): (CharacterModel, Option<PlanetModel>),
) -> CharacterDto {
    character_dto(character, planet.map(|p| p.name))
}

/// Converts a planet and its residents, residents take their planet name from `planet`
pub fn planet_dto(planet: PlanetModel, residents: Vec<CharacterModel>) -> PlanetDto {
    let residents = residents
        .into_iter()
        .map(|resident| character_dto(resident, Some(planet.name.clone())))
        .collect();

    PlanetDto {
        id: planet.id,
        name: planet.name,
        climate: planet.climate,
        dimension: planet.dimension,
        residents,
    }
}

/// Converts a user, the password hash is dropped
pub fn user_dto(user: UserModel, favorites: UserFavoritesDto) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
        is_active: user.is_active,
        favorites,
    }
}

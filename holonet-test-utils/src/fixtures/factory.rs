//! Entity models built in memory, never inserted.

use crate::constant::{
    TEST_CHARACTER_SPECIES, TEST_PASSWORD_HASH, TEST_PLANET_CLIMATE, TEST_PLANET_DIMENSION,
};

/// Create a user model with test values.
pub fn mock_user_model(user_id: i32, email: &str) -> entity::user::Model {
    entity::user::Model {
        id: user_id,
        name: Some(format!("User {}", user_id)),
        email: email.to_string(),
        password: TEST_PASSWORD_HASH.to_string(),
        is_active: true,
    }
}

/// Create a planet model with test values.
pub fn mock_planet_model(planet_id: i32, name: &str) -> entity::planet::Model {
    entity::planet::Model {
        id: planet_id,
        name: name.to_string(),
        climate: TEST_PLANET_CLIMATE.to_string(),
        dimension: TEST_PLANET_DIMENSION.to_string(),
    }
}

/// Create a character model with test values.
///
/// # Arguments
/// - `character_id` - ID of the character
/// - `name` - Display name
/// - `planet_id` - Native planet, if any
pub fn mock_character_model(
    character_id: i32,
    name: &str,
    planet_id: Option<i32>,
) -> entity::character::Model {
    entity::character::Model {
        id: character_id,
        name: name.to_string(),
        species: TEST_CHARACTER_SPECIES.to_string(),
        planet_id,
    }
}

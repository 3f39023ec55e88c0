//! Database model type aliases.
//!
//! Short names for the `entity` crate models used throughout the server.

/// Type alias for the user database model.
///
/// # Fields (from `entity::user::Model`)
/// - `id` - Primary key
/// - `name` - Optional display name
/// - `email` - Unique email address
/// - `password` - Argon2 hash of the user's password
/// - `is_active` - Whether the account is active
pub type UserModel = entity::user::Model;

/// Type alias for the planet database model.
pub type PlanetModel = entity::planet::Model;

/// Type alias for the character database model.
///
/// `planet_id` references the character's native planet and is `None` when the character
/// has none or the planet was deleted.
pub type CharacterModel = entity::character::Model;

/// Type alias for a user's favorite planet junction record.
pub type FavoritePlanetModel = entity::user_favorite_planet::Model;

/// Type alias for a user's favorite character junction record.
pub type FavoriteCharacterModel = entity::user_favorite_character::Model;

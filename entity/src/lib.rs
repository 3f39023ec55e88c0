//! Database entities for the holonet schema.

pub mod prelude;

pub mod character;
pub mod planet;
pub mod user;
pub mod user_favorite_character;
pub mod user_favorite_planet;

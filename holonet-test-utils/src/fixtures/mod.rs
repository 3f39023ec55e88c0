//! Test fixture modules for database records.
//!
//! - `factory` - Unsaved entity models for pure serialization tests
//! - `user` - User records
//! - `planet` - Planet records
//! - `character` - Character records
//! - `favorite` - Favorite junction records

pub mod character;
pub mod factory;
pub mod favorite;
pub mod planet;
pub mod user;

//! Data access layer repositories.
//!
//! Repositories wrap sea-orm queries for one table family each. Relationship traversal
//! (residents, native planet, favorites) is done with joins so that serializing a list
//! never issues a query per row.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

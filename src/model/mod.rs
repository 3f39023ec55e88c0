//! Data transfer objects exchanged over the HTTP API.
//!
//! JSON field names follow the public API contract (`nombre`, `clima`, `especie`, ...)
//! while the Rust field names stay in English.

pub mod api;
pub mod character;
pub mod planet;
pub mod user;

//! HTTP controller endpoints for the holonet web API.
//!
//! Axum handlers for users, planets, characters, and favorites. Controllers extract
//! request data, call the matching service, and turn the result into a JSON response.
//! Errors are returned as [`crate::server::error::Error`] which maps itself to a status.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

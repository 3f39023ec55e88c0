//! Service layer for business logic.
//!
//! Services combine repository results into API DTOs and enforce the favorite state
//! rules (target must exist, no duplicate favorites, only existing favorites removed).

pub mod character;
pub mod favorite;
pub mod planet;
pub mod user;

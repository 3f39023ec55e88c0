//! Application state shared by every handler.

use sea_orm::DatabaseConnection;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: DatabaseConnection,
    /// ID of the user whose favorites are read and modified.
    pub favorites_user_id: i32,
}

impl AppState {
    /// Creates a new [`AppState`].
    pub fn new(db: DatabaseConnection, favorites_user_id: i32) -> Self {
        Self {
            db,
            favorites_user_id,
        }
    }
}

/// Allows test utilities to build state without depending on this crate.
impl From<(DatabaseConnection, i32)> for AppState {
    fn from((db, favorites_user_id): (DatabaseConnection, i32)) -> Self {
        Self::new(db, favorites_user_id)
    }
}

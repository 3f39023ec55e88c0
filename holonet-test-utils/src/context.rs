//! Test context structure and utilities.
//!
//! [`TestContext`] is returned by [`TestBuilder`](crate::TestBuilder) and owns an in-memory
//! SQLite database with the requested tables and fixtures already inserted.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_FAVORITES_USER_ID, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_favorite_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// test.planet().insert_mock_planet("Dagobah").await?;
///
/// // Build handler state
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// User ID handlers act on when managing favorites
    pub favorites_user_id: i32,
}

impl TestContext {
    /// Convert the database and acting user into any type constructible from them
    ///
    /// Lets integration tests build the server's `AppState` without this crate depending on
    /// the server crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<(DatabaseConnection, i32)>,
    {
        T::from((self.db.clone(), self.favorites_user_id))
    }
}

impl TestContext {
    /// Connect to a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Empty database ready for tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            db,
            favorites_user_id: TEST_FAVORITES_USER_ID,
        })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements executed in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}

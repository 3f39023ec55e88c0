//! Declarative test builder.
//!
//! Configuration methods queue tables and fixtures; everything runs during the final
//! `build()` call, in dependency order.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Chain configuration methods and finalize with `build()`. Rows get sequential IDs
/// starting at 1 in the order they were queued, so the first `with_mock_planet` is
/// planet 1, the second is planet 2, and so on.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_favorite_tables: bool,

    mock_users: usize,
    planets: Vec<String>,
    characters: Vec<(String, Option<i32>)>, // (name, planet_id)
    favorite_planets: Vec<(i32, i32)>,      // (user_id, planet_id)
    favorite_characters: Vec<(i32, i32)>,   // (user_id, character_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_favorite_tables: false,
            mock_users: 0,
            planets: Vec::new(),
            characters: Vec::new(),
            favorite_planets: Vec::new(),
            favorite_characters: Vec::new(),
        }
    }

    /// Add every table the favorites API needs.
    ///
    /// Creates User, Planet, Character, UserFavoritePlanet and UserFavoriteCharacter, with
    /// the foreign keys declared on the entities.
    pub fn with_favorite_tables(mut self) -> Self {
        self.include_favorite_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock user with email `user{n}@example.com`.
    pub fn with_mock_user(mut self) -> Self {
        self.mock_users += 1;
        self
    }

    /// Insert a mock planet with the given name.
    pub fn with_mock_planet(mut self, name: impl Into<String>) -> Self {
        self.planets.push(name.into());
        self
    }

    /// Insert a mock character native to `planet_id`, if any.
    ///
    /// The planet must be queued with `with_mock_planet` first.
    pub fn with_mock_character(mut self, name: impl Into<String>, planet_id: Option<i32>) -> Self {
        self.characters.push((name.into(), planet_id));
        self
    }

    /// Mark a planet as a favorite of a user.
    pub fn with_favorite_planet(mut self, user_id: i32, planet_id: i32) -> Self {
        self.favorite_planets.push((user_id, planet_id));
        self
    }

    /// Mark a character as a favorite of a user.
    pub fn with_favorite_character(mut self, user_id: i32, character_id: i32) -> Self {
        self.favorite_characters.push((user_id, character_id));
        self
    }

    /// Build the test context.
    ///
    /// Executes queued operations in the following order:
    /// 1. Creates tables (favorite tables if requested, then custom tables)
    /// 2. Inserts users, planets, then characters
    /// 3. Inserts favorite pairs
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Configured test environment
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_favorite_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::UserFavoritePlanet),
                schema.create_table_from_entity(entity::prelude::UserFavoriteCharacter),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert entity fixtures
        for _ in 0..self.mock_users {
            setup.user().insert_mock_user().await?;
        }

        for name in self.planets {
            setup.planet().insert_mock_planet(&name).await?;
        }

        for (name, planet_id) in self.characters {
            setup
                .character()
                .insert_mock_character(&name, planet_id)
                .await?;
        }

        // 3. Insert favorites
        for (user_id, planet_id) in self.favorite_planets {
            setup
                .favorite()
                .insert_favorite_planet(user_id, planet_id)
                .await?;
        }

        for (user_id, character_id) in self.favorite_characters {
            setup
                .favorite()
                .insert_favorite_character(user_id, character_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

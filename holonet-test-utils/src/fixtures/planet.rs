use sea_orm::{ActiveValue, DeleteResult, EntityTrait};

use crate::{
    constant::{TEST_PLANET_CLIMATE, TEST_PLANET_DIMENSION},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn planet<'a>(&'a mut self) -> PlanetFixtures<'a> {
        PlanetFixtures { setup: self }
    }
}

pub struct PlanetFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> PlanetFixtures<'a> {
    pub async fn insert_planet(
        &self,
        name: &str,
        climate: &str,
        dimension: &str,
    ) -> Result<entity::planet::Model, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            climate: ActiveValue::Set(climate.to_string()),
            dimension: ActiveValue::Set(dimension.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a planet with test climate & dimension values.
    pub async fn insert_mock_planet(&self, name: &str) -> Result<entity::planet::Model, TestError> {
        self.insert_planet(name, TEST_PLANET_CLIMATE, TEST_PLANET_DIMENSION)
            .await
    }

    /// Delete a planet, triggering the foreign key actions on dependent rows.
    pub async fn delete_planet(&self, planet_id: i32) -> Result<DeleteResult, TestError> {
        Ok(entity::prelude::Planet::delete_by_id(planet_id)
            .exec(&self.setup.db)
            .await?)
    }
}

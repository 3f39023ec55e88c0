//! Planet read service.

use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{data::planet::PlanetRepository, error::Error, util::serialize::planet_dto},
};

/// Service for reading planets and their residents.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all planets ordered by ID with their residents
    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo
            .get_all_with_residents()
            .await?
            .into_iter()
            .map(|(planet, residents)| planet_dto(planet, residents))
            .collect();

        Ok(planets)
    }

    /// Retrieves a planet with its residents, `None` if the planet does not exist
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo
            .get_with_residents(planet_id)
            .await?
            .map(|(planet, residents)| planet_dto(planet, residents));

        Ok(planet)
    }
}

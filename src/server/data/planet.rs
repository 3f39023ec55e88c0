//! Planet repository, residents are loaded alongside each planet.

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::db::{CharacterModel, PlanetModel};

/// Repository for the `planets` table.
pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a planet by ID, `None` if it does not exist
    pub async fn get_by_id(&self, planet_id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planet::find_by_id(planet_id)
            .one(self.db)
            .await
    }

    /// Gets a planet along with the characters native to it
    pub async fn get_with_residents(
        &self,
        planet_id: i32,
    ) -> Result<Option<(PlanetModel, Vec<CharacterModel>)>, DbErr> {
        let planet = entity::prelude::Planet::find_by_id(planet_id)
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await?;

        Ok(planet.into_iter().next())
    }

    /// Gets all planets ordered by ID, each with the characters native to it
    pub async fn get_all_with_residents(
        &self,
    ) -> Result<Vec<(PlanetModel, Vec<CharacterModel>)>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await
    }

    /// Gets the planets favorited by a user ordered by ID, each with its residents
    pub async fn get_favorites_with_residents(
        &self,
        user_id: i32,
    ) -> Result<Vec<(PlanetModel, Vec<CharacterModel>)>, DbErr> {
        entity::prelude::Planet::find()
            .inner_join(entity::prelude::UserFavoritePlanet)
            .filter(entity::user_favorite_planet::Column::UserId.eq(user_id))
            .order_by_asc(entity::planet::Column::Id)
            .find_with_related(entity::prelude::Character)
            .all(self.db)
            .await
    }
}

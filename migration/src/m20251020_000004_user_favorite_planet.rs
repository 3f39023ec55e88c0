use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000002_planet::Planet};

static IDX_USER_FAVORITE_PLANET_PLANET_ID: &str = "idx-user_favorite_planets-planet_id";
static FK_USER_FAVORITE_PLANET_USER_ID: &str = "fk-user_favorite_planets-user_id";
static FK_USER_FAVORITE_PLANET_PLANET_ID: &str = "fk-user_favorite_planets-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoritePlanet::Table)
                    .if_not_exists()
                    .col(integer(UserFavoritePlanet::UserId))
                    .col(integer(UserFavoritePlanet::PlanetId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoritePlanet::UserId)
                            .col(UserFavoritePlanet::PlanetId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PLANET_USER_ID)
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_PLANET_PLANET_ID)
                            .from(UserFavoritePlanet::Table, UserFavoritePlanet::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // user_id already leads the primary key index
        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_FAVORITE_PLANET_PLANET_ID)
                    .table(UserFavoritePlanet::Table)
                    .col(UserFavoritePlanet::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_FAVORITE_PLANET_PLANET_ID)
                    .table(UserFavoritePlanet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoritePlanet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoritePlanet {
    #[sea_orm(iden = "user_favorite_planets")]
    Table,
    UserId,
    PlanetId,
}

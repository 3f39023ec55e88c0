use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251020_000002_planet::Planet;

static IDX_CHARACTER_PLANET_ID: &str = "idx-characters-planet_id";
static FK_CHARACTER_PLANET_ID: &str = "fk-characters-planet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared inline as SQLite cannot add them to an existing table
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len(Character::Name, 25))
                    .col(string_len(Character::Species, 120))
                    .col(integer_null(Character::PlanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_PLANET_ID)
                            .from(Character::Table, Character::PlanetId)
                            .to(Planet::Table, Planet::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .col(Character::PlanetId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_CHARACTER_PLANET_ID)
                    .table(Character::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    #[sea_orm(iden = "characters")]
    Table,
    Id,
    Name,
    Species,
    PlanetId,
}

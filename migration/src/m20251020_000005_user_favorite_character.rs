use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251020_000001_user::User, m20251020_000003_character::Character};

static IDX_USER_FAVORITE_CHARACTER_CHARACTER_ID: &str = "idx-user_favorite_characters-character_id";
static FK_USER_FAVORITE_CHARACTER_USER_ID: &str = "fk-user_favorite_characters-user_id";
static FK_USER_FAVORITE_CHARACTER_CHARACTER_ID: &str = "fk-user_favorite_characters-character_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFavoriteCharacter::Table)
                    .if_not_exists()
                    .col(integer(UserFavoriteCharacter::UserId))
                    .col(integer(UserFavoriteCharacter::CharacterId))
                    .primary_key(
                        Index::create()
                            .col(UserFavoriteCharacter::UserId)
                            .col(UserFavoriteCharacter::CharacterId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_CHARACTER_USER_ID)
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::UserId)
                            .to(User::Table, User::Id)
                            .on_update(ForeignKeyAction::Cascade)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_FAVORITE_CHARACTER_CHARACTER_ID)
                            .from(UserFavoriteCharacter::Table, UserFavoriteCharacter::CharacterId)
                            .to(Character::Table, Character::Id)
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
                    .name(IDX_USER_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(UserFavoriteCharacter::Table)
                    .col(UserFavoriteCharacter::CharacterId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_USER_FAVORITE_CHARACTER_CHARACTER_ID)
                    .table(UserFavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserFavoriteCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum UserFavoriteCharacter {
    #[sea_orm(iden = "user_favorite_characters")]
    Table,
    UserId,
    CharacterId,
}

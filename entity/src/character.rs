use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "characters")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: String,
    /// Native planet, cleared when the planet is deleted
    pub planet_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::planet::Entity",
        from = "Column::PlanetId",
        to = "super::planet::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Planet,
    #[sea_orm(has_many = "super::user_favorite_character::Entity")]
    UserFavoriteCharacter,
}

impl Related<super::planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Planet.def()
    }
}

impl Related<super::user_favorite_character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoriteCharacter.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_character::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_character::Relation::Character.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

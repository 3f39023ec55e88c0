use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "planets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub climate: String,
    pub dimension: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Characters native to this planet
    #[sea_orm(has_many = "super::character::Entity")]
    Character,
    #[sea_orm(has_many = "super::user_favorite_planet::Entity")]
    UserFavoritePlanet,
}

impl Related<super::character::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Character.def()
    }
}

impl Related<super::user_favorite_planet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserFavoritePlanet.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_favorite_planet::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_favorite_planet::Relation::Planet.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

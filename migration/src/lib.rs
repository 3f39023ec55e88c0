pub use sea_orm_migration::prelude::*;

mod m20251020_000001_user;
mod m20251020_000002_planet;
mod m20251020_000003_character;
mod m20251020_000004_user_favorite_planet;
mod m20251020_000005_user_favorite_character;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_user::Migration),
            Box::new(m20251020_000002_planet::Migration),
            Box::new(m20251020_000003_character::Migration),
            Box::new(m20251020_000004_user_favorite_planet::Migration),
            Box::new(m20251020_000005_user_favorite_character::Migration),
        ]
    }
}

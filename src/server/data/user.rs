//! User repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

use crate::server::model::db::UserModel;

/// Repository for the `users` table.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    ///
    /// `password_hash` must already be hashed, this repository stores it verbatim.
    pub async fn create(
        &self,
        email: String,
        password_hash: String,
        name: Option<String>,
        is_active: bool,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(password_hash),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    /// Gets a user by ID, `None` if it does not exist
    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}

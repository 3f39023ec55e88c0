use sea_orm::{ActiveValue, EntityTrait, PaginatorTrait};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the given email and a placeholder password hash.
    pub async fn insert_user(&self, email: &str) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(None),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert the next numbered mock user, `user{n}@example.com`.
    pub async fn insert_mock_user(&self) -> Result<entity::user::Model, TestError> {
        let existing = entity::prelude::User::find().count(&self.setup.db).await?;

        let email = format!("user{}@example.com", existing + 1);

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(Some(format!("User {}", existing + 1))),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(TEST_PASSWORD_HASH.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}

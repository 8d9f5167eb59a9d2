use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{FavoriteModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user with the password "password"
    pub async fn insert_user(&self, name: &str, email: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set("password".to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a favorite row with whichever target columns are provided
    ///
    /// Prefer the per-kind helpers; this exists for tests that need unusual rows.
    pub async fn insert_favorite(
        &self,
        user_id: i32,
        planet_id: Option<i32>,
        people_id: Option<i32>,
        starship_id: Option<i32>,
    ) -> Result<FavoriteModel, TestError> {
        Ok(
            entity::prelude::Favorites::insert(entity::favorites::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planet_id: ActiveValue::Set(planet_id),
                people_id: ActiveValue::Set(people_id),
                starship_id: ActiveValue::Set(starship_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_planet_favorite(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, Some(planet_id), None, None)
            .await
    }

    pub async fn insert_person_favorite(
        &self,
        user_id: i32,
        person_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, Some(person_id), None)
            .await
    }

    pub async fn insert_starship_favorite(
        &self,
        user_id: i32,
        starship_id: i32,
    ) -> Result<FavoriteModel, TestError> {
        self.insert_favorite(user_id, None, None, Some(starship_id))
            .await
    }
}

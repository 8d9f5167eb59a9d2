use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::UserModel;

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
    /// Fails with a unique constraint violation if `email` is already registered.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
        is_active: bool,
    ) -> Result<UserModel, DbErr> {
        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(is_active),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<UserModel>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }

    /// Overwrites the provided fields of a user, leaving `None` fields unchanged
    ///
    /// Returns `None` if no user has the ID. Fails with a unique constraint violation if the
    /// new `email` belongs to another user.
    pub async fn update(
        &self,
        user_id: i32,
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Option<UserModel>, DbErr> {
        let user = match entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?
        {
            Some(user) => user,
            None => return Ok(None),
        };

        let mut user_am = user.clone().into_active_model();
        if let Some(name) = name {
            user_am.name = ActiveValue::Set(name.to_string());
        }
        if let Some(email) = email {
            user_am.email = ActiveValue::Set(email.to_string());
        }
        if let Some(password) = password {
            user_am.password = ActiveValue::Set(password.to_string());
        }
        if let Some(is_active) = is_active {
            user_am.is_active = ActiveValue::Set(is_active);
        }

        // An UPDATE without columns is invalid SQL
        if !user_am.is_changed() {
            return Ok(Some(user));
        }

        let user = user_am.update(self.db).await?;

        Ok(Some(user))
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}

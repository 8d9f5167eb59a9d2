use std::collections::HashMap;

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{CreateUserDto, UserDto},
    server::{
        data::{favorite::FavoriteRepository, user::UserRepository},
        error::{user::UserError, Error},
        service::favorite::load_favorite_dtos,
        util::db::is_unique_violation,
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every user along with their favorites
    ///
    /// Favorites for all users are fetched in one query and grouped by user ID before
    /// their targets are loaded, keeping the query count independent of the user count.
    pub async fn get_users(&self) -> Result<Vec<UserDto>, Error> {
        let users = UserRepository::new(self.db).get_all().await?;
        let user_ids: Vec<i32> = users.iter().map(|u| u.id).collect();

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_ids(&user_ids)
            .await?;
        let favorite_dtos = load_favorite_dtos(self.db, &favorites).await?;

        let mut by_user: HashMap<i32, Vec<_>> = HashMap::new();
        for dto in favorite_dtos {
            by_user.entry(dto.user_id).or_default().push(dto);
        }

        Ok(users
            .into_iter()
            .map(|user| {
                let favorites = by_user.remove(&user.id).unwrap_or_default();
                UserDto::from_parts(user, favorites)
            })
            .collect())
    }

    /// Creates a new active user with no favorites
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user
    /// - `Err(UserError::MissingFields)` - Name, email or password is absent or empty
    /// - `Err(UserError::EmailTaken)` - Another user already has the email
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let (Some(name), Some(email), Some(password)) = (
            non_empty(payload.name),
            non_empty(payload.email),
            non_empty(payload.password),
        ) else {
            return Err(UserError::MissingFields.into());
        };

        let txn = self.db.begin().await?;

        let user = match UserRepository::new(&txn)
            .create(&name, &email, &password, true)
            .await
        {
            Ok(user) => user,
            Err(err) if is_unique_violation(&err) => {
                return Err(UserError::EmailTaken(email).into());
            }
            Err(err) => return Err(err.into()),
        };

        txn.commit().await?;

        tracing::info!(user_id = %user.id, "Created user {}", user.name);

        Ok(UserDto::from_parts(user, Vec::new()))
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    TransactionTrait,
};
use serde_json::{Map, Value};

use crate::{
    model::admin::{AdminGridDto, AdminIndexDto, AdminRowDto, AdminRowPayloadDto, AdminViewDto},
    server::{
        data::{
            catalog::{
                people::PeopleRepository, planet::PlanetRepository, starship::StarshipRepository,
            },
            favorite::FavoriteRepository,
            user::UserRepository,
        },
        error::{admin::AdminError, favorite::FavoriteError, user::UserError, Error},
        model::{
            admin::{AdminTable, AdminView, ADMIN_VIEWS},
            favorite::FavoriteTarget,
        },
        service::{
            favorite::{create_or_conflict, target_exists},
            user::non_empty,
        },
        util::db::is_unique_violation,
    },
};

/// Service backing the JSON admin surface for browsing & editing every registered table
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminService<'a> {
    /// Creates a new instance of [`AdminService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every registered view under the given admin title
    pub fn index(title: &str) -> AdminIndexDto {
        AdminIndexDto {
            name: title.to_string(),
            views: ADMIN_VIEWS
                .iter()
                .map(|view| AdminViewDto {
                    name: view.name.to_string(),
                    endpoint: view.endpoint(),
                    columns: owned_columns(view),
                })
                .collect(),
        }
    }

    /// Gets every row of the view's table ordered by ID, keeping only the view's columns
    ///
    /// # Returns
    /// - `Ok(AdminGridDto)` - The view's rows
    /// - `Err(AdminError::ViewNotFound)` - No view is registered under `view_name`
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn grid(&self, view_name: &str) -> Result<AdminGridDto, Error> {
        let view = find_view(view_name)?;

        let rows = match view.table {
            AdminTable::User => {
                load_rows::<entity::prelude::User, _>(self.db, entity::user::Column::Id).await?
            }
            AdminTable::Planets => {
                load_rows::<entity::prelude::Planets, _>(self.db, entity::planets::Column::Id).await?
            }
            AdminTable::People => {
                load_rows::<entity::prelude::People, _>(self.db, entity::people::Column::Id).await?
            }
            AdminTable::Starship => {
                load_rows::<entity::prelude::Starship, _>(self.db, entity::starship::Column::Id).await?
            }
            AdminTable::Favorites => {
                load_rows::<entity::prelude::Favorites, _>(self.db, entity::favorites::Column::Id)
                .await?
            }
        };

        Ok(AdminGridDto {
            view: view.name.to_string(),
            columns: owned_columns(view),
            rows: rows
                .into_iter()
                .map(|row| project_row(row, view.columns))
                .collect(),
        })
    }

    /// Creates a row in the view's table and returns it as the view shows it
    ///
    /// Users start active unless `is_active` is `false`. Favorites go through the same
    /// existence & duplicate checks as the public favorites endpoints.
    ///
    /// # Returns
    /// - `Ok(AdminRowDto)` - The created row
    /// - `Err(AdminError::ViewNotFound)` - No view is registered under `view_name`
    /// - `Err(AdminError::MissingName)` - Catalog view without a name
    /// - `Err(UserError::MissingFields)` / `Err(UserError::EmailTaken)` - Invalid user
    /// - `Err(AdminError::InvalidFavoriteTarget)` - Favorite without a user or single target
    /// - `Err(FavoriteError::UserOrTargetNotFound)` / `Err(FavoriteError::AlreadyExists)` -
    ///   Favorite pointing at missing rows or duplicating an existing one
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_row(
        &self,
        view_name: &str,
        payload: AdminRowPayloadDto,
    ) -> Result<AdminRowDto, Error> {
        let view = find_view(view_name)?;

        let txn = self.db.begin().await?;

        let id = match view.table {
            AdminTable::User => create_user_row(&txn, payload).await?,
            AdminTable::Planets => {
                let name = required_name(payload.name)?;
                PlanetRepository::new(&txn).create(&name).await?.id
            }
            AdminTable::People => {
                let name = required_name(payload.name)?;
                PeopleRepository::new(&txn).create(&name).await?.id
            }
            AdminTable::Starship => {
                let name = required_name(payload.name)?;
                StarshipRepository::new(&txn).create(&name).await?.id
            }
            AdminTable::Favorites => {
                let (user_id, target) = favorite_parts(&payload, None)?;
                check_favorite(&txn, user_id, target, None).await?;
                create_or_conflict(&txn, user_id, target).await?.id
            }
        };

        let row = load_view_row(&txn, view, id).await?;

        txn.commit().await?;

        tracing::info!(view = %view.name, row_id = %id, "Admin created row");

        Ok(AdminRowDto {
            view: view.name.to_string(),
            row,
        })
    }

    /// Overwrites the provided fields of a row and returns it as the view shows it
    ///
    /// Catalog rows require a name. User fields left out are unchanged, but a provided string
    /// must not be empty. A favorite keeps its user unless `user_id` is given and always needs
    /// exactly one target.
    ///
    /// # Returns
    /// - `Ok(AdminRowDto)` - The updated row
    /// - `Err(AdminError::ViewNotFound)` - No view is registered under `view_name`
    /// - `Err(AdminError::RowNotFound)` - The view's table has no row with the ID
    /// - `Err(AdminError::MissingName)` / `Err(AdminError::EmptyField)` - Invalid field values
    /// - `Err(UserError::EmailTaken)` - Another user already has the email
    /// - `Err(AdminError::InvalidFavoriteTarget)` - Favorite without a single target
    /// - `Err(FavoriteError::UserOrTargetNotFound)` / `Err(FavoriteError::AlreadyExists)` -
    ///   Favorite pointing at missing rows or duplicating an existing one
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_row(
        &self,
        view_name: &str,
        id: i32,
        payload: AdminRowPayloadDto,
    ) -> Result<AdminRowDto, Error> {
        let view = find_view(view_name)?;

        let txn = self.db.begin().await?;

        let found = match view.table {
            AdminTable::User => update_user_row(&txn, id, payload).await?,
            AdminTable::Planets => {
                let name = required_name(payload.name)?;
                PlanetRepository::new(&txn)
                    .update_name(id, &name)
                    .await?
                    .is_some()
            }
            AdminTable::People => {
                let name = required_name(payload.name)?;
                PeopleRepository::new(&txn)
                    .update_name(id, &name)
                    .await?
                    .is_some()
            }
            AdminTable::Starship => {
                let name = required_name(payload.name)?;
                StarshipRepository::new(&txn)
                    .update_name(id, &name)
                    .await?
                    .is_some()
            }
            AdminTable::Favorites => update_favorite_row(&txn, id, payload).await?,
        };
        if !found {
            return Err(row_not_found(view, id).into());
        }

        let row = load_view_row(&txn, view, id).await?;

        txn.commit().await?;

        tracing::info!(view = %view.name, row_id = %id, "Admin updated row");

        Ok(AdminRowDto {
            view: view.name.to_string(),
            row,
        })
    }

    /// Deletes a row along with every favorite that references it
    ///
    /// # Returns
    /// - `Ok(())` - The row was deleted
    /// - `Err(AdminError::ViewNotFound)` - No view is registered under `view_name`
    /// - `Err(AdminError::RowNotFound)` - The view's table has no row with the ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_row(&self, view_name: &str, id: i32) -> Result<(), Error> {
        let view = find_view(view_name)?;

        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let result = match view.table {
            AdminTable::User => {
                favorite_repo.delete_by_user_id(id).await?;
                UserRepository::new(&txn).delete(id).await?
            }
            AdminTable::Planets => {
                favorite_repo
                    .delete_by_target(FavoriteTarget::Planet(id))
                    .await?;
                PlanetRepository::new(&txn).delete(id).await?
            }
            AdminTable::People => {
                favorite_repo
                    .delete_by_target(FavoriteTarget::Person(id))
                    .await?;
                PeopleRepository::new(&txn).delete(id).await?
            }
            AdminTable::Starship => {
                favorite_repo
                    .delete_by_target(FavoriteTarget::Starship(id))
                    .await?;
                StarshipRepository::new(&txn).delete(id).await?
            }
            AdminTable::Favorites => favorite_repo.delete(id).await?,
        };
        if result.rows_affected == 0 {
            return Err(row_not_found(view, id).into());
        }

        txn.commit().await?;

        tracing::info!(view = %view.name, row_id = %id, "Admin deleted row");

        Ok(())
    }
}

fn find_view(view_name: &str) -> Result<&'static AdminView, AdminError> {
    AdminView::find(view_name).ok_or_else(|| AdminError::ViewNotFound(view_name.to_string()))
}

fn row_not_found(view: &AdminView, id: i32) -> AdminError {
    AdminError::RowNotFound {
        view: view.name.to_string(),
        id,
    }
}

fn required_name(name: Option<String>) -> Result<String, AdminError> {
    non_empty(name).ok_or(AdminError::MissingName)
}

/// Passes `None` through but rejects a provided empty string
fn optional_field(value: Option<String>, field: &'static str) -> Result<Option<String>, AdminError> {
    match value {
        Some(value) if value.is_empty() => Err(AdminError::EmptyField(field)),
        value => Ok(value),
    }
}

/// The favorite's owner & single target from the payload, falling back to `current_user_id`
fn favorite_parts(
    payload: &AdminRowPayloadDto,
    current_user_id: Option<i32>,
) -> Result<(i32, FavoriteTarget), AdminError> {
    let user_id = payload
        .user_id
        .or(current_user_id)
        .ok_or(AdminError::InvalidFavoriteTarget)?;
    let target =
        FavoriteTarget::from_columns(payload.planet_id, payload.people_id, payload.starship_id)
            .ok_or(AdminError::InvalidFavoriteTarget)?;

    Ok((user_id, target))
}

/// Checks that the user & target exist and that no other favorite already links them
///
/// `favorite_id` is the favorite being edited, which may keep its own link.
async fn check_favorite<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
    favorite_id: Option<i32>,
) -> Result<(), Error> {
    let user_exists = UserRepository::new(db).get_by_id(user_id).await?.is_some();
    if !user_exists || !target_exists(db, target).await? {
        return Err(FavoriteError::UserOrTargetNotFound { user_id, target }.into());
    }

    let existing = FavoriteRepository::new(db)
        .find_by_target(user_id, target)
        .await?;
    if existing.is_some_and(|favorite| Some(favorite.id) != favorite_id) {
        return Err(FavoriteError::AlreadyExists { user_id, target }.into());
    }

    Ok(())
}

async fn create_user_row<C: ConnectionTrait>(
    db: &C,
    payload: AdminRowPayloadDto,
) -> Result<i32, Error> {
    let (Some(name), Some(email), Some(password)) = (
        non_empty(payload.name),
        non_empty(payload.email),
        non_empty(payload.password),
    ) else {
        return Err(UserError::MissingFields.into());
    };
    let is_active = payload.is_active.unwrap_or(true);

    let result = UserRepository::new(db)
        .create(&name, &email, &password, is_active)
        .await;

    match result {
        Ok(user) => Ok(user.id),
        Err(err) if is_unique_violation(&err) => Err(UserError::EmailTaken(email).into()),
        Err(err) => Err(err.into()),
    }
}

async fn update_user_row<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: AdminRowPayloadDto,
) -> Result<bool, Error> {
    let name = optional_field(payload.name, "name")?;
    let email = optional_field(payload.email, "email")?;
    let password = optional_field(payload.password, "password")?;

    let result = UserRepository::new(db)
        .update(
            id,
            name.as_deref(),
            email.as_deref(),
            password.as_deref(),
            payload.is_active,
        )
        .await;

    match result {
        Ok(user) => Ok(user.is_some()),
        Err(err) if is_unique_violation(&err) => {
            Err(UserError::EmailTaken(email.unwrap_or_default()).into())
        }
        Err(err) => Err(err.into()),
    }
}

async fn update_favorite_row<C: ConnectionTrait>(
    db: &C,
    id: i32,
    payload: AdminRowPayloadDto,
) -> Result<bool, Error> {
    let favorite_repo = FavoriteRepository::new(db);

    let Some(favorite) = favorite_repo.get_by_id(id).await? else {
        return Ok(false);
    };

    let (user_id, target) = favorite_parts(&payload, Some(favorite.user_id))?;
    check_favorite(db, user_id, target, Some(id)).await?;

    match favorite_repo.update_target(id, user_id, target).await {
        Ok(favorite) => Ok(favorite.is_some()),
        Err(err) if is_unique_violation(&err) => {
            Err(FavoriteError::AlreadyExists { user_id, target }.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Loads a single row projected to the view's columns
async fn load_view_row<C: ConnectionTrait>(
    db: &C,
    view: &AdminView,
    id: i32,
) -> Result<Map<String, Value>, Error> {
    let row = match view.table {
        AdminTable::User => {
            load_row::<entity::prelude::User, _>(db, entity::user::Column::Id, id).await?
        }
        AdminTable::Planets => {
            load_row::<entity::prelude::Planets, _>(db, entity::planets::Column::Id, id).await?
        }
        AdminTable::People => {
            load_row::<entity::prelude::People, _>(db, entity::people::Column::Id, id).await?
        }
        AdminTable::Starship => {
            load_row::<entity::prelude::Starship, _>(db, entity::starship::Column::Id, id).await?
        }
        AdminTable::Favorites => {
            load_row::<entity::prelude::Favorites, _>(db, entity::favorites::Column::Id, id)
                .await?
        }
    };

    let row = row.ok_or_else(|| row_not_found(view, id))?;

    Ok(project_row(row, view.columns))
}

async fn load_row<E, C>(db: &C, id_column: E::Column, id: i32) -> Result<Option<Value>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find().filter(id_column.eq(id)).into_json().one(db).await
}

async fn load_rows<E, C>(db: &C, order_by: E::Column) -> Result<Vec<Value>, DbErr>
where
    E: EntityTrait,
    C: ConnectionTrait,
{
    E::find().order_by_asc(order_by).into_json().all(db).await
}

fn project_row(row: Value, columns: &[&str]) -> Map<String, Value> {
    let Value::Object(mut row) = row else {
        return Map::new();
    };

    columns
        .iter()
        .map(|column| {
            let value = row.remove(*column).unwrap_or(Value::Null);
            (column.to_string(), value)
        })
        .collect()
}

fn owned_columns(view: &AdminView) -> Vec<String> {
    view.columns.iter().map(|c| c.to_string()).collect()
}

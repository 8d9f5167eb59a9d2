use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};

use crate::{
    model::favorite::FavoriteDto,
    server::{
        data::{
            catalog::{
                people::PeopleRepository, planet::PlanetRepository, starship::StarshipRepository,
            },
            favorite::FavoriteRepository,
            user::UserRepository,
        },
        error::{favorite::FavoriteError, user::UserError, Error},
        model::{db::FavoriteModel, favorite::FavoriteTarget},
        util::db::is_unique_violation,
    },
};

/// Service for listing, creating & removing a user's favorites.
pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    /// Creates a new instance of [`FavoriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's favorites with their targets embedded
    ///
    /// # Returns
    /// - `Ok(Vec<FavoriteDto>)` - The user's favorites, possibly empty
    /// - `Err(Error::UserError)` - The user does not exist
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_user_favorites(&self, user_id: i32) -> Result<Vec<FavoriteDto>, Error> {
        if UserRepository::new(self.db)
            .get_by_id(user_id)
            .await?
            .is_none()
        {
            return Err(UserError::NotFound(user_id).into());
        }

        let favorites = FavoriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(load_favorite_dtos(self.db, &favorites).await?)
    }

    /// Links the user to the target
    ///
    /// The user & target existence checks, the duplicate check and the insert share one
    /// transaction. A concurrent duplicate that slips past the check and is rejected by a
    /// unique index is reported the same as one caught by the check.
    ///
    /// # Returns
    /// - `Ok(FavoriteDto)` - The created favorite
    /// - `Err(FavoriteError::UserOrTargetNotFound)` - User or target does not exist
    /// - `Err(FavoriteError::AlreadyExists)` - The user already has this favorite
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favorite(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteDto, Error> {
        let txn = self.db.begin().await?;

        let user_exists = UserRepository::new(&txn).get_by_id(user_id).await?.is_some();
        let target_exists = target_exists(&txn, target).await?;
        if !user_exists || !target_exists {
            return Err(FavoriteError::UserOrTargetNotFound { user_id, target }.into());
        }

        if FavoriteRepository::new(&txn)
            .find_by_target(user_id, target)
            .await?
            .is_some()
        {
            return Err(FavoriteError::AlreadyExists { user_id, target }.into());
        }

        let favorite = create_or_conflict(&txn, user_id, target).await?;

        let dto = load_favorite_dtos(&txn, std::slice::from_ref(&favorite))
            .await?
            .pop()
            .ok_or_else(|| {
                Error::InternalError(format!(
                    "Failed to build favorite ID {} right after creating it",
                    favorite.id
                ))
            })?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            favorite_id = %favorite.id,
            "Added {} ID {} to favorites",
            target.kind(),
            target.id()
        );

        Ok(dto)
    }

    /// Removes the link between the user & the target
    ///
    /// # Returns
    /// - `Ok(())` - The favorite was deleted
    /// - `Err(FavoriteError::NotInFavorites)` - No such favorite exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn remove_favorite(&self, user_id: i32, target: FavoriteTarget) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let favorite_repo = FavoriteRepository::new(&txn);

        let Some(favorite) = favorite_repo.find_by_target(user_id, target).await? else {
            return Err(FavoriteError::NotInFavorites { user_id, target }.into());
        };

        favorite_repo.delete(favorite.id).await?;

        txn.commit().await?;

        tracing::info!(
            user_id = %user_id,
            favorite_id = %favorite.id,
            "Removed {} ID {} from favorites",
            target.kind(),
            target.id()
        );

        Ok(())
    }
}

/// Inserts the favorite, reporting a unique index rejection as [`FavoriteError::AlreadyExists`]
pub(crate) async fn create_or_conflict<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<FavoriteModel, Error> {
    match FavoriteRepository::new(db).create(user_id, target).await {
        Ok(favorite) => Ok(favorite),
        Err(err) if is_unique_violation(&err) => {
            Err(FavoriteError::AlreadyExists { user_id, target }.into())
        }
        Err(err) => Err(err.into()),
    }
}

pub(crate) async fn target_exists<C: ConnectionTrait>(db: &C, target: FavoriteTarget) -> Result<bool, DbErr> {
    let exists = match target {
        FavoriteTarget::Planet(id) => PlanetRepository::new(db).get_by_id(id).await?.is_some(),
        FavoriteTarget::Person(id) => PeopleRepository::new(db).get_by_id(id).await?.is_some(),
        FavoriteTarget::Starship(id) => StarshipRepository::new(db).get_by_id(id).await?.is_some(),
    };

    Ok(exists)
}

/// Builds DTOs for the favorites, loading each kind of target in a single query
///
/// Order of the favorites is preserved. Targets that no longer exist are left as `None`.
pub async fn load_favorite_dtos<C: ConnectionTrait>(
    db: &C,
    favorites: &[FavoriteModel],
) -> Result<Vec<FavoriteDto>, DbErr> {
    let planet_ids: Vec<i32> = favorites.iter().filter_map(|f| f.planet_id).collect();
    let people_ids: Vec<i32> = favorites.iter().filter_map(|f| f.people_id).collect();
    let starship_ids: Vec<i32> = favorites.iter().filter_map(|f| f.starship_id).collect();

    let planets: HashMap<i32, _> = PlanetRepository::new(db)
        .get_many_by_ids(&planet_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let people: HashMap<i32, _> = PeopleRepository::new(db)
        .get_many_by_ids(&people_ids)
        .await?
        .into_iter()
        .map(|p| (p.id, p))
        .collect();
    let starships: HashMap<i32, _> = StarshipRepository::new(db)
        .get_many_by_ids(&starship_ids)
        .await?
        .into_iter()
        .map(|s| (s.id, s))
        .collect();

    Ok(favorites
        .iter()
        .map(|favorite| {
            FavoriteDto::from_parts(
                favorite,
                favorite.planet_id.and_then(|id| planets.get(&id).cloned()),
                favorite.people_id.and_then(|id| people.get(&id).cloned()),
                favorite.starship_id.and_then(|id| starships.get(&id).cloned()),
            )
        })
        .collect())
}

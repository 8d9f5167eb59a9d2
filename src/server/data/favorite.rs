use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::{db::FavoriteModel, favorite::FavoriteTarget};

pub struct FavoriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavoriteRepository<'a, C> {
    /// Creates a new instance of [`FavoriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favorite linking the user to the target
    ///
    /// Only the target's column is set, the other two remain null.
    pub async fn create(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<FavoriteModel, DbErr> {
        let (planet_id, people_id, starship_id) = target.columns();

        let favorite = entity::favorites::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            planet_id: ActiveValue::Set(planet_id),
            people_id: ActiveValue::Set(people_id),
            starship_id: ActiveValue::Set(starship_id),
            ..Default::default()
        };

        favorite.insert(self.db).await
    }

    pub async fn get_by_id(&self, favorite_id: i32) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find_by_id(favorite_id)
            .one(self.db)
            .await
    }

    /// Finds the favorite linking the user to the target, if any
    pub async fn find_by_target(
        &self,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .filter(target_condition(target))
            .one(self.db)
            .await
    }

    /// Gets a user's favorites ordered by ID
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<FavoriteModel>, DbErr> {
        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the favorites of every provided user ordered by ID
    pub async fn get_by_user_ids(
        &self,
        user_ids: &[i32],
    ) -> Result<Vec<FavoriteModel>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Favorites::find()
            .filter(entity::favorites::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_asc(entity::favorites::Column::Id)
            .all(self.db)
            .await
    }

    /// Points an existing favorite at a different user and/or target
    ///
    /// All three target columns are rewritten so the favorite keeps exactly one target.
    /// Returns `None` if no favorite has the ID.
    pub async fn update_target(
        &self,
        favorite_id: i32,
        user_id: i32,
        target: FavoriteTarget,
    ) -> Result<Option<FavoriteModel>, DbErr> {
        let favorite = match entity::prelude::Favorites::find_by_id(favorite_id)
            .one(self.db)
            .await?
        {
            Some(favorite) => favorite,
            None => return Ok(None),
        };

        let (planet_id, people_id, starship_id) = target.columns();

        let mut favorite_am = favorite.into_active_model();
        favorite_am.user_id = ActiveValue::Set(user_id);
        favorite_am.planet_id = ActiveValue::Set(planet_id);
        favorite_am.people_id = ActiveValue::Set(people_id);
        favorite_am.starship_id = ActiveValue::Set(starship_id);

        let favorite = favorite_am.update(self.db).await?;

        Ok(Some(favorite))
    }

    /// Deletes every favorite belonging to the user
    pub async fn delete_by_user_id(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(entity::favorites::Column::UserId.eq(user_id))
            .exec(self.db)
            .await
    }

    /// Deletes every user's favorite pointing at the target
    pub async fn delete_by_target(&self, target: FavoriteTarget) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_many()
            .filter(target_condition(target))
            .exec(self.db)
            .await
    }

    /// Deletes a favorite
    ///
    /// Returns OK regardless of the favorite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favorite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favorites::delete_by_id(favorite_id)
            .exec(self.db)
            .await
    }
}

fn target_condition(target: FavoriteTarget) -> Condition {
    let column = match target {
        FavoriteTarget::Planet(_) => entity::favorites::Column::PlanetId,
        FavoriteTarget::Person(_) => entity::favorites::Column::PeopleId,
        FavoriteTarget::Starship(_) => entity::favorites::Column::StarshipId,
    };

    Condition::all().add(column.eq(target.id()))
}

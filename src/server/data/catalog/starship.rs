use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::StarshipModel;

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new starship
    pub async fn create(&self, name: &str) -> Result<StarshipModel, DbErr> {
        let starship = entity::starship::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        starship.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<StarshipModel>, DbErr> {
        entity::prelude::Starship::find_by_id(id).one(self.db).await
    }

    /// Gets all starships ordered by ID
    pub async fn get_all(&self) -> Result<Vec<StarshipModel>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the starships matching the provided IDs, IDs without a row are skipped
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<StarshipModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Starship::find()
            .filter(entity::starship::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Renames the starship, returning `None` if no starship has the ID
    pub async fn update_name(&self, id: i32, name: &str) -> Result<Option<StarshipModel>, DbErr> {
        let starship = match entity::prelude::Starship::find_by_id(id).one(self.db).await? {
            Some(starship) => starship,
            None => return Ok(None),
        };

        let mut starship_am = starship.into_active_model();
        starship_am.name = ActiveValue::Set(name.to_string());

        let starship = starship_am.update(self.db).await?;

        Ok(Some(starship))
    }

    /// Deletes a starship
    ///
    /// Returns OK regardless of the starship existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Starship::delete_by_id(id).exec(self.db).await
    }
}

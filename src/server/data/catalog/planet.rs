use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::PlanetModel;

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new planet
    pub async fn create(&self, name: &str) -> Result<PlanetModel, DbErr> {
        let planet = entity::planets::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        planet.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PlanetModel>, DbErr> {
        entity::prelude::Planets::find_by_id(id).one(self.db).await
    }

    /// Gets all planets ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PlanetModel>, DbErr> {
        entity::prelude::Planets::find()
            .order_by_asc(entity::planets::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the planets matching the provided IDs, IDs without a row are skipped
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<PlanetModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Planets::find()
            .filter(entity::planets::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Renames the planet, returning `None` if no planet has the ID
    pub async fn update_name(&self, id: i32, name: &str) -> Result<Option<PlanetModel>, DbErr> {
        let planet = match entity::prelude::Planets::find_by_id(id).one(self.db).await? {
            Some(planet) => planet,
            None => return Ok(None),
        };

        let mut planet_am = planet.into_active_model();
        planet_am.name = ActiveValue::Set(name.to_string());

        let planet = planet_am.update(self.db).await?;

        Ok(Some(planet))
    }

    /// Deletes a planet
    ///
    /// Returns OK regardless of the planet existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Planets::delete_by_id(id).exec(self.db).await
    }
}

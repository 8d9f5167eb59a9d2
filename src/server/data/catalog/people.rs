use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::db::PersonModel;

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new person
    pub async fn create(&self, name: &str) -> Result<PersonModel, DbErr> {
        let person = entity::people::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        person.insert(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<PersonModel>, DbErr> {
        entity::prelude::People::find_by_id(id).one(self.db).await
    }

    /// Gets all people ordered by ID
    pub async fn get_all(&self) -> Result<Vec<PersonModel>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the people matching the provided IDs, IDs without a row are skipped
    pub async fn get_many_by_ids(&self, ids: &[i32]) -> Result<Vec<PersonModel>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::People::find()
            .filter(entity::people::Column::Id.is_in(ids.iter().copied()))
            .all(self.db)
            .await
    }

    /// Renames the person, returning `None` if no person has the ID
    pub async fn update_name(&self, id: i32, name: &str) -> Result<Option<PersonModel>, DbErr> {
        let person = match entity::prelude::People::find_by_id(id).one(self.db).await? {
            Some(person) => person,
            None => return Ok(None),
        };

        let mut person_am = person.into_active_model();
        person_am.name = ActiveValue::Set(name.to_string());

        let person = person_am.update(self.db).await?;

        Ok(Some(person))
    }

    /// Deletes a person
    ///
    /// Returns OK regardless of the person existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::People::delete_by_id(id).exec(self.db).await
    }
}

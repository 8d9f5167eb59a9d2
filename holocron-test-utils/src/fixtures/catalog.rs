use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{PersonModel, PlanetModel, StarshipModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(
            entity::prelude::Planets::insert(entity::planets::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_person(&self, name: &str) -> Result<PersonModel, TestError> {
        Ok(
            entity::prelude::People::insert(entity::people::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_starship(&self, name: &str) -> Result<StarshipModel, TestError> {
        Ok(
            entity::prelude::Starship::insert(entity::starship::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

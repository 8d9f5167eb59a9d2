use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{PersonDto, PlanetDto, StarshipDto},
    server::{
        data::catalog::{
            people::PeopleRepository, planet::PlanetRepository, starship::StarshipRepository,
        },
        error::{catalog::CatalogError, Error},
        model::catalog::CatalogKind,
    },
};

/// Read access to the planets, people & starships catalog
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a planet by ID
    ///
    /// # Returns
    /// - `Ok(PlanetDto)` - Planet found
    /// - `Err(Error::CatalogError)` - No planet with that ID
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetDto, Error> {
        let planet = PlanetRepository::new(self.db)
            .get_by_id(planet_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Planet,
                id: planet_id,
            })?;

        Ok(planet.into())
    }

    pub async fn get_people(&self) -> Result<Vec<PersonDto>, Error> {
        let people = PeopleRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PersonDto::from).collect())
    }

    pub async fn get_person(&self, person_id: i32) -> Result<PersonDto, Error> {
        let person = PeopleRepository::new(self.db)
            .get_by_id(person_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Person,
                id: person_id,
            })?;

        Ok(person.into())
    }

    pub async fn get_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }

    pub async fn get_starship(&self, starship_id: i32) -> Result<StarshipDto, Error> {
        let starship = StarshipRepository::new(self.db)
            .get_by_id(starship_id)
            .await?
            .ok_or(CatalogError::NotFound {
                kind: CatalogKind::Starship,
                id: starship_id,
            })?;

        Ok(starship.into())
    }
}

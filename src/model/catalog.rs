use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::planets::Model> for PlanetDto {
    fn from(planet: entity::planets::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
        }
    }
}

impl From<entity::people::Model> for PersonDto {
    fn from(person: entity::people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
        }
    }
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
        }
    }
}

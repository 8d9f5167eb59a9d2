use serde::{Deserialize, Serialize};

use crate::model::catalog::{PersonDto, PlanetDto, StarshipDto};

/// A user's favorite with its target embedded.
///
/// Exactly one of `planet`, `people` & `starship` is populated for a well-formed row. A target
/// whose row no longer exists serializes as `null`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FavoriteDto {
    pub id: i32,
    pub user_id: i32,
    pub planet: Option<PlanetDto>,
    pub people: Option<PersonDto>,
    pub starship: Option<StarshipDto>,
}

impl FavoriteDto {
    /// Builds the DTO from a favorite row and whichever related rows were found for it
    pub fn from_parts(
        favorite: &entity::favorites::Model,
        planet: Option<entity::planets::Model>,
        people: Option<entity::people::Model>,
        starship: Option<entity::starship::Model>,
    ) -> Self {
        Self {
            id: favorite.id,
            user_id: favorite.user_id,
            planet: planet.map(PlanetDto::from),
            people: people.map(PersonDto::from),
            starship: starship.map(StarshipDto::from),
        }
    }
}

/// Response body after a favorite is created
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedFavoriteDto {
    pub message: String,
    pub favorite: FavoriteDto,
}

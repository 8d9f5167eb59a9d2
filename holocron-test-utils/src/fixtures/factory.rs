//! Factory functions for generating mock database models.
//!
//! These are in-memory model instances that don't require database interaction, suitable for
//! unit tests of pure conversions.

use crate::model::{FavoriteModel, PlanetModel, UserModel};

/// Create a mock active user model with the given ID
pub fn mock_user_model(id: i32, name: &str, email: &str) -> UserModel {
    UserModel {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: "password".to_string(),
        is_active: true,
    }
}

/// Create a mock planet model with the given ID
pub fn mock_planet_model(id: i32, name: &str) -> PlanetModel {
    PlanetModel {
        id,
        name: name.to_string(),
    }
}

/// Create a mock favorite model
///
/// # Arguments
/// - `id` - ID of the favorite row
/// - `user_id` - ID of the owning user
/// - `planet_id`, `people_id`, `starship_id` - Target columns, normally exactly one is set
pub fn mock_favorite_model(
    id: i32,
    user_id: i32,
    planet_id: Option<i32>,
    people_id: Option<i32>,
    starship_id: Option<i32>,
) -> FavoriteModel {
    FavoriteModel {
        id,
        user_id,
        planet_id,
        people_id,
        starship_id,
    }
}

//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A registered user. `email` is unique across all users.
pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planets::Model;

pub type PersonModel = entity::people::Model;

pub type StarshipModel = entity::starship::Model;

/// An association between a user and exactly one planet, person or starship.
///
/// # Fields (from `entity::favorites::Model`)
/// - `id` - Primary key
/// - `user_id` - Foreign key to the owning user
/// - `planet_id` - Foreign key to a planet, set only for planet favorites
/// - `people_id` - Foreign key to a person, set only for people favorites
/// - `starship_id` - Foreign key to a starship, set only for starship favorites
pub type FavoriteModel = entity::favorites::Model;

//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main holocron crate to keep fixtures & tests consistent.

pub type UserModel = entity::user::Model;

pub type PlanetModel = entity::planets::Model;

pub type PersonModel = entity::people::Model;

pub type StarshipModel = entity::starship::Model;

pub type FavoriteModel = entity::favorites::Model;

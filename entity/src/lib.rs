//! SeaORM entities for the Holocron catalog and favorites schema.

pub mod prelude;

pub mod favorites;
pub mod people;
pub mod planets;
pub mod starship;
pub mod user;

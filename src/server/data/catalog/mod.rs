//! Repositories for the read-mostly catalog tables: planets, people & starships.

pub mod people;
pub mod planet;
pub mod starship;

//! Test fixture modules for database record creation.
//!
//! - `catalog` - Planets, people & starships
//! - `user` - Users and their favorites
//! - `factory` - In-memory models for unit tests that never touch the database

pub mod catalog;
pub mod factory;
pub mod user;

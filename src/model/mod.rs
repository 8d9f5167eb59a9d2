//! JSON data transfer objects returned and accepted by the API.
//!
//! Each stored entity has a DTO here along with the pure conversion that builds it from the
//! database model. Conversions never touch the database; related rows are loaded beforehand
//! and passed in.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub mod user;

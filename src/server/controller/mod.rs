//! HTTP controller endpoints for the Holocron web API.
//!
//! This module contains Axum handlers for users, the planets/people/starships catalog,
//! favorites, the admin surface and the sitemap. Controllers extract path parameters & JSON
//! bodies, delegate to services, and return the response status & body. Every handler is
//! annotated with utoipa for the OpenAPI document.

pub mod admin;
pub mod catalog;
pub mod favorite;
pub mod sitemap;
pub mod util;
pub mod user;

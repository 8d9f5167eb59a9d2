//! Server application core modules.
//!
//! This module contains all server-side functionality for the Holocron application: HTTP
//! routing & controllers, services, database repositories, the admin surface, configuration
//! and error handling. It provides the backend for the Star Wars catalog of planets, people and
//! starships and each user's favorites.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;

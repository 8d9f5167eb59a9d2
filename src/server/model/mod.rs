//! Server application models and type definitions.
//!
//! This module contains application state, database model type aliases and the small domain
//! types shared by repositories, services and controllers.

pub mod admin;
pub mod app;
pub mod catalog;
pub mod db;
pub mod favorite;

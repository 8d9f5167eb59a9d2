//! Service layer for business logic.
//!
//! Services validate requests, decide which repositories to call and turn models into DTOs.
//! Each write runs in its own transaction which is committed on success and rolled back when
//! dropped on any error path.

pub mod admin;
pub mod catalog;
pub mod favorite;
pub mod user;

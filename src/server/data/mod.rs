//! Data access layer repositories.
//!
//! Repositories wrap SeaORM queries for a single table each. They are generic over
//! [`sea_orm::ConnectionTrait`] so the same repository runs against the pooled connection for
//! reads or a request-scoped transaction for writes.

pub mod catalog;
pub mod favorite;
pub mod user;

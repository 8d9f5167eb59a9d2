//! Error types for the Holocron server application.
//!
//! Every failure a handler can produce is an [`Error`]. Domain errors (catalog lookups, users,
//! favorites, the admin surface) map to their own HTTP status & message, and everything else
//! becomes a logged 500. All error bodies share the `{"error": <message>}` shape.

pub mod admin;
pub mod api;
pub mod catalog;
pub mod config;
pub mod favorite;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        admin::AdminError, api::ApiError, catalog::CatalogError, config::ConfigError,
        favorite::FavoriteError, user::UserError,
    },
};

/// Main error type for the Holocron server application.
///
/// Uses `thiserror`'s `#[from]` so `?` converts domain & library errors automatically.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Planet, person or starship lookup failed.
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// User validation or lookup failed.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// Favorite creation or removal failed.
    #[error(transparent)]
    FavoriteError(#[from] FavoriteError),
    /// Admin surface request failed.
    #[error(transparent)]
    AdminError(#[from] AdminError),
    /// Path parameter could not be parsed into the handler's expected type.
    #[error(transparent)]
    PathRejection(#[from] axum::extract::rejection::PathRejection),
    /// Error with an explicit status code & message.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Internal error indicating a bug in Holocron's code.
    #[error("Internal error with Holocron's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// IO error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Validation failures & conflicts
/// - 404 Not Found - Missing users, catalog entries, favorites, admin views or unparsable IDs
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::CatalogError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::FavoriteError(err) => err.into_response(),
            Self::AdminError(err) => err.into_response(),
            Self::ApiError(err) => err.into_response(),
            Self::PathRejection(err) => {
                tracing::debug!("Rejected path parameters: {}", err);

                ApiError::not_found("Not found").into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

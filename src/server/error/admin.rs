use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::api::ApiError;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Admin view {0:?} does not exist")]
    ViewNotFound(String),
    #[error("Admin view {view:?} has no row with ID {id}")]
    RowNotFound { view: String, id: i32 },
    #[error("Admin request is missing a name")]
    MissingName,
    #[error("Admin request set {0} to an empty value")]
    EmptyField(&'static str),
    #[error("Admin favorite request does not name a user and exactly one target")]
    InvalidFavoriteTarget,
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::ViewNotFound(_) => ApiError::not_found("Admin view not found"),
            Self::RowNotFound { .. } => ApiError::not_found("Record not found"),
            Self::MissingName => ApiError::bad_request("Missing name"),
            Self::EmptyField(field) => ApiError::bad_request(format!("{field} must not be empty")),
            Self::InvalidFavoriteTarget => ApiError::bad_request(
                "Favorite needs a user_id and exactly one of planet_id, people_id, or starship_id",
            ),
        }
        .into_response()
    }
}

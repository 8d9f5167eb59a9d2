use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::api::ApiError;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User creation request had no JSON body")]
    MissingBody,
    #[error("User creation request is missing name, email, or password")]
    MissingFields,
    #[error("A user with email {0:?} already exists")]
    EmailTaken(String),
    #[error("User ID {0} not found")]
    NotFound(i32),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingBody => ApiError::bad_request("No input data provided"),
            Self::MissingFields => ApiError::bad_request("Missing name, email, or password"),
            Self::EmailTaken(_) => ApiError::bad_request("Email already in use"),
            Self::NotFound(_) => ApiError::not_found("User not found"),
        }
        .into_response()
    }
}

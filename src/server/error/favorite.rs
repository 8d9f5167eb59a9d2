use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{error::api::ApiError, model::favorite::FavoriteTarget};

#[derive(Error, Debug)]
pub enum FavoriteError {
    #[error("User ID {user_id} or {} ID {} not found", .target.kind(), .target.id())]
    UserOrTargetNotFound { user_id: i32, target: FavoriteTarget },
    #[error("{} ID {} is already a favorite of user ID {user_id}", .target.kind(), .target.id())]
    AlreadyExists { user_id: i32, target: FavoriteTarget },
    #[error("{} ID {} is not a favorite of user ID {user_id}", .target.kind(), .target.id())]
    NotInFavorites { user_id: i32, target: FavoriteTarget },
}

impl IntoResponse for FavoriteError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserOrTargetNotFound { target, .. } => {
                ApiError::not_found(format!("User or {} not found", target.kind()))
            }
            Self::AlreadyExists { target, .. } => {
                ApiError::bad_request(format!("{} already in favorites", target.kind()))
            }
            Self::NotInFavorites { target, .. } => {
                ApiError::not_found(format!("{} is not in favorites", target.kind()))
            }
        }
        .into_response()
    }
}

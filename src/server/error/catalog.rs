use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::{error::api::ApiError, model::catalog::CatalogKind};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} ID {id} not found")]
    NotFound { kind: CatalogKind, id: i32 },
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { kind, .. } => {
                tracing::debug!("{}", self);

                ApiError::not_found(format!("{} not found", kind)).into_response()
            }
        }
    }
}

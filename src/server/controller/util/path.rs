use axum::extract::FromRequestParts;

use crate::server::error::Error;

/// Path parameters extractor whose rejection is rendered as a JSON [`Error`]
///
/// A segment that can't be parsed into the expected type, such as `abc` or an ID overflowing
/// `i32`, can never match a row, so it is answered with the same 404 envelope as any other
/// unknown route.
#[derive(FromRequestParts, Debug)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

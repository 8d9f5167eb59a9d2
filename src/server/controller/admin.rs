use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        admin::{AdminGridDto, AdminIndexDto, AdminRowDto, AdminRowPayloadDto},
        api::{ErrorDto, MessageDto},
    },
    server::{
        controller::util::path::Path,
        error::Error,
        model::app::AppState,
        service::admin::AdminService,
    },
};

pub static ADMIN_TAG: &str = "admin";

/// List the registered admin views
#[utoipa::path(
    get,
    path = "/admin",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when listing admin views", body = AdminIndexDto)
    ),
)]
pub async fn get_admin_index(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::OK, Json(AdminService::index(&state.admin_title)))
}

/// Browse every row of an admin view
#[utoipa::path(
    get,
    path = "/admin/{view}",
    tag = ADMIN_TAG,
    params(("view" = String, Path, description = "Name of the admin view, e.g. planets")),
    responses(
        (status = 200, description = "Success when retrieving the view's rows", body = AdminGridDto),
        (status = 404, description = "Admin view not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_view(
    State(state): State<AppState>,
    Path(view): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let grid = AdminService::new(&state.db).grid(&view).await?;

    Ok((StatusCode::OK, Json(grid)))
}

/// Create a row through an admin view
///
/// Catalog views take a `name`, users take `name`, `email`, `password` & optional
/// `is_active`, favorites take a `user_id` and exactly one target ID.
#[utoipa::path(
    post,
    path = "/admin/{view}",
    tag = ADMIN_TAG,
    params(("view" = String, Path, description = "Name of the admin view, e.g. planets")),
    request_body = AdminRowPayloadDto,
    responses(
        (status = 201, description = "Row created", body = AdminRowDto),
        (status = 400, description = "Missing or invalid fields, duplicate email or favorite", body = ErrorDto),
        (status = 404, description = "Admin view, favorite user or favorite target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_row(
    State(state): State<AppState>,
    Path(view): Path<String>,
    payload: Result<Json<AdminRowPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let row = AdminService::new(&state.db)
        .create_row(&view, payload_or_default(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(row)))
}

/// Edit a row through an admin view
#[utoipa::path(
    put,
    path = "/admin/{view}/{id}",
    tag = ADMIN_TAG,
    params(
        ("view" = String, Path, description = "Name of the admin view, e.g. planets"),
        ("id" = i32, Path, description = "ID of the row")
    ),
    request_body = AdminRowPayloadDto,
    responses(
        (status = 200, description = "Row updated", body = AdminRowDto),
        (status = 400, description = "Missing or invalid fields, duplicate email or favorite", body = ErrorDto),
        (status = 404, description = "Admin view, row or favorite target not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_row(
    State(state): State<AppState>,
    Path((view, id)): Path<(String, i32)>,
    payload: Result<Json<AdminRowPayloadDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let row = AdminService::new(&state.db)
        .update_row(&view, id, payload_or_default(payload))
        .await?;

    Ok((StatusCode::OK, Json(row)))
}

/// Delete a row through an admin view, along with the favorites referencing it
#[utoipa::path(
    delete,
    path = "/admin/{view}/{id}",
    tag = ADMIN_TAG,
    params(
        ("view" = String, Path, description = "Name of the admin view, e.g. planets"),
        ("id" = i32, Path, description = "ID of the row")
    ),
    responses(
        (status = 200, description = "Row deleted", body = MessageDto),
        (status = 404, description = "Admin view or row not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin_row(
    State(state): State<AppState>,
    Path((view, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, Error> {
    AdminService::new(&state.db).delete_row(&view, id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Record deleted".to_string(),
        }),
    ))
}

/// An unreadable body is treated like a body without any fields
fn payload_or_default(
    payload: Result<Json<AdminRowPayloadDto>, JsonRejection>,
) -> AdminRowPayloadDto {
    payload.map(|Json(payload)| payload).unwrap_or_default()
}

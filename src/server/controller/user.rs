use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::{Map, Value};

use crate::{
    model::{
        api::ErrorDto,
        favorite::FavoriteDto,
        user::{CreateUserDto, CreatedUserDto, UserDto},
    },
    server::{
        controller::util::path::Path,
        error::{user::UserError, Error},
        model::app::AppState,
        service::{favorite::FavoriteService, user::UserService},
    },
};

pub static USER_TAG: &str = "user";

/// List all users with their favorites
#[utoipa::path(
    get,
    path = "/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let users = UserService::new(&state.db).get_users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Create a user
///
/// Name, email & password are required and must not be empty. The user starts active with no
/// favorites.
#[utoipa::path(
    post,
    path = "/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = CreatedUserDto),
        (status = 400, description = "Missing body, missing fields or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    // An unreadable body and an empty JSON object both count as no input
    let body = match payload {
        Ok(Json(body)) if !body.is_empty() => body,
        _ => return Err(UserError::MissingBody.into()),
    };
    let payload: CreateUserDto =
        serde_json::from_value(Value::Object(body)).map_err(|_| UserError::MissingFields)?;

    let user = UserService::new(&state.db).create_user(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedUserDto {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// List a user's favorites
#[utoipa::path(
    get,
    path = "/users/{user_id}/favorites",
    tag = USER_TAG,
    params(("user_id" = i32, Path, description = "ID of the user")),
    responses(
        (status = 200, description = "Success when listing the user's favorites", body = Vec<FavoriteDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_favorites(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let favorites = FavoriteService::new(&state.db)
        .get_user_favorites(user_id)
        .await?;

    Ok((StatusCode::OK, Json(favorites)))
}

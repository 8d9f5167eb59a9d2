use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::CreatedFavoriteDto,
    },
    server::{
        controller::util::path::Path,
        error::Error, model::app::AppState, model::favorite::FavoriteTarget,
        service::favorite::FavoriteService,
    },
};

pub static FAVORITE_TAG: &str = "favorite";

/// Add a planet to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 201, description = "Planet added to favorites", body = CreatedFavoriteDto),
        (status = 400, description = "Planet already in favorites", body = ErrorDto),
        (status = 404, description = "User or planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    add_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Remove a planet from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/planet/{planet_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("planet_id" = i32, Path, description = "ID of the planet")
    ),
    responses(
        (status = 200, description = "Planet removed from favorites", body = MessageDto),
        (status = 404, description = "Planet is not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Path((user_id, planet_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    remove_favorite(&state, user_id, FavoriteTarget::Planet(planet_id)).await
}

/// Add a person to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("person_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 201, description = "Person added to favorites", body = CreatedFavoriteDto),
        (status = 400, description = "Person already in favorites", body = ErrorDto),
        (status = 404, description = "User or person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    add_favorite(&state, user_id, FavoriteTarget::Person(person_id)).await
}

/// Remove a person from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/people/{person_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("person_id" = i32, Path, description = "ID of the person")
    ),
    responses(
        (status = 200, description = "Person removed from favorites", body = MessageDto),
        (status = 404, description = "Person is not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Path((user_id, person_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    remove_favorite(&state, user_id, FavoriteTarget::Person(person_id)).await
}

/// Add a starship to a user's favorites
#[utoipa::path(
    post,
    path = "/users/{user_id}/favorite/starship/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 201, description = "Starship added to favorites", body = CreatedFavoriteDto),
        (status = 400, description = "Starship already in favorites", body = ErrorDto),
        (status = 404, description = "User or starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_favorite_starship(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    add_favorite(&state, user_id, FavoriteTarget::Starship(starship_id)).await
}

/// Remove a starship from a user's favorites
#[utoipa::path(
    delete,
    path = "/users/{user_id}/favorite/starship/{starship_id}",
    tag = FAVORITE_TAG,
    params(
        ("user_id" = i32, Path, description = "ID of the user"),
        ("starship_id" = i32, Path, description = "ID of the starship")
    ),
    responses(
        (status = 200, description = "Starship removed from favorites", body = MessageDto),
        (status = 404, description = "Starship is not in favorites", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_favorite_starship(
    State(state): State<AppState>,
    Path((user_id, starship_id)): Path<(i32, i32)>,
) -> Result<Response, Error> {
    remove_favorite(&state, user_id, FavoriteTarget::Starship(starship_id)).await
}

async fn add_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Response, Error> {
    let favorite = FavoriteService::new(&state.db)
        .add_favorite(user_id, target)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedFavoriteDto {
            message: format!("{} added to favorites", target.kind()),
            favorite,
        }),
    )
        .into_response())
}

async fn remove_favorite(
    state: &AppState,
    user_id: i32,
    target: FavoriteTarget,
) -> Result<Response, Error> {
    FavoriteService::new(&state.db)
        .remove_favorite(user_id, target)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: format!("{} removed from favorites", target.kind()),
        }),
    )
        .into_response())
}

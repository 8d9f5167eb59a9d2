use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{PersonDto, PlanetDto, StarshipDto},
    },
    server::{
        controller::util::path::Path,
        error::Error,
        model::app::AppState,
        service::catalog::CatalogService,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).get_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a planet by ID
#[utoipa::path(
    get,
    path = "/planets/{planet_id}",
    tag = CATALOG_TAG,
    params(("planet_id" = i32, Path, description = "ID of the planet")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db).get_planet(planet_id).await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// List all people
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db).get_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a person by ID
#[utoipa::path(
    get,
    path = "/people/{person_id}",
    tag = CATALOG_TAG,
    params(("person_id" = i32, Path, description = "ID of the person")),
    responses(
        (status = 200, description = "Success when retrieving the person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(person_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = CatalogService::new(&state.db).get_person(person_id).await?;

    Ok((StatusCode::OK, Json(person)))
}

/// List all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starships = CatalogService::new(&state.db).get_starships().await?;

    Ok((StatusCode::OK, Json(starships)))
}

/// Get a starship by ID
#[utoipa::path(
    get,
    path = "/starships/{starship_id}",
    tag = CATALOG_TAG,
    params(("starship_id" = i32, Path, description = "ID of the starship")),
    responses(
        (status = 200, description = "Success when retrieving the starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(starship_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let starship = CatalogService::new(&state.db)
        .get_starship(starship_id)
        .await?;

    Ok((StatusCode::OK, Json(starship)))
}

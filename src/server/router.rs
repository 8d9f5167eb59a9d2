//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications, the
//! sitemap at `/` is built from the resulting document, and Swagger UI is served at
//! `/api/docs`.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{cors::CorsLayer, normalize_path::NormalizePath, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users`, `POST /users` - List & create users
/// - `GET /users/{user_id}/favorites` - List a user's favorites
/// - `GET /planets`, `GET /planets/{planet_id}` - Planets catalog
/// - `GET /people`, `GET /people/{person_id}` - People catalog
/// - `GET /starships`, `GET /starships/{starship_id}` - Starships catalog
/// - `POST`/`DELETE /users/{user_id}/favorite/{planet,people,starship}/{id}` - Manage favorites
/// - `GET /admin`, `GET`/`POST /admin/{view}`, `PUT`/`DELETE /admin/{view}/{id}` - Admin surface
/// - `GET /` - Sitemap of every route above
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`. Requests matching no
/// route, or whose path IDs don't parse, receive a JSON 404.
///
/// # Returns
/// An Axum `Router<AppState>` with every route registered, ready for [`app`] to attach state
/// & middleware.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::user::USER_TAG, description = "User API routes"),
        (name = controller::catalog::CATALOG_TAG, description = "Planets, people & starships API routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "User favorites API routes"),
        (name = controller::admin::ADMIN_TAG, description = "Admin API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::user::get_users,
            controller::user::create_user
        ))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_starships))
        .routes(routes!(controller::catalog::get_starship))
        .routes(routes!(
            controller::favorite::add_favorite_planet,
            controller::favorite::remove_favorite_planet
        ))
        .routes(routes!(
            controller::favorite::add_favorite_person,
            controller::favorite::remove_favorite_person
        ))
        .routes(routes!(
            controller::favorite::add_favorite_starship,
            controller::favorite::remove_favorite_starship
        ))
        .routes(routes!(controller::admin::get_admin_index))
        .routes(routes!(
            controller::admin::get_admin_view,
            controller::admin::create_admin_row
        ))
        .routes(routes!(
            controller::admin::update_admin_row,
            controller::admin::delete_admin_row
        ))
        .split_for_parts();

    let sitemap = Arc::new(controller::sitemap::build_sitemap(&api));

    routes
        .route(
            "/",
            get(controller::sitemap::get_sitemap).layer(Extension(sitemap)),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .fallback(controller::sitemap::not_found)
}

/// Attaches state, request tracing & permissive CORS to [`routes`]
///
/// Trailing slashes are trimmed before routing so `/users/` reaches the same handler as
/// `/users`. This has to wrap the router rather than be one of its layers, since layers only
/// run after a route has matched.
pub fn app(state: AppState) -> NormalizePath<Router> {
    let router = routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    NormalizePath::trim_trailing_slash(router)
}

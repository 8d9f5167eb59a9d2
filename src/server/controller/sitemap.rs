use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;
use utoipa::openapi::OpenApi;

use crate::model::{
    api::ErrorDto,
    sitemap::{RouteDto, SitemapDto},
};

/// Routes served outside of the OpenAPI document
const EXTRA_ROUTES: [&str; 2] = ["/", "/api/docs"];

/// Builds the sitemap from every path in the OpenAPI document plus the sitemap & docs routes
///
/// Routes are sorted by path and each lists its methods in a fixed order.
pub fn build_sitemap(api: &OpenApi) -> SitemapDto {
    let mut routes: Vec<RouteDto> = api
        .paths
        .paths
        .iter()
        .map(|(path, item)| {
            let methods = [
                ("GET", item.get.is_some()),
                ("POST", item.post.is_some()),
                ("PUT", item.put.is_some()),
                ("PATCH", item.patch.is_some()),
                ("DELETE", item.delete.is_some()),
            ]
            .into_iter()
            .filter(|(_, registered)| *registered)
            .map(|(method, _)| method.to_string())
            .collect();

            RouteDto {
                path: path.clone(),
                methods,
            }
        })
        .collect();

    for path in EXTRA_ROUTES {
        if !routes.iter().any(|route| route.path == path) {
            routes.push(RouteDto {
                path: path.to_string(),
                methods: vec!["GET".to_string()],
            });
        }
    }

    routes.sort_by(|a, b| a.path.cmp(&b.path));

    SitemapDto { routes }
}

/// List every route the server registers
///
/// Intended for debugging. The sitemap is built once at startup from the OpenAPI document.
pub async fn get_sitemap(Extension(sitemap): Extension<Arc<SitemapDto>>) -> impl IntoResponse {
    (StatusCode::OK, Json(sitemap.as_ref().clone()))
}

/// JSON 404 for requests that match no route
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorDto {
            error: "Not found".to_string(),
        }),
    )
}

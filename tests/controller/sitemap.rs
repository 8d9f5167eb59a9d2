//! Tests for the sitemap & the JSON fallback.

use axum::http::{Method, StatusCode};
use holocron::model::{api::ErrorDto, sitemap::SitemapDto};

use super::*;

/// Expect every API route with its methods, plus the sitemap & docs
#[tokio::test]
async fn lists_registered_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(test.into_app(), Method::GET, "/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let sitemap: SitemapDto = body_json(resp).await;
    let route = |path: &str| sitemap.routes.iter().find(|r| r.path == path);

    assert!(route("/").is_some());
    assert!(route("/api/docs").is_some());
    assert_eq!(route("/users").unwrap().methods, vec!["GET", "POST"]);
    assert_eq!(route("/planets/{planet_id}").unwrap().methods, vec!["GET"]);
    assert_eq!(
        route("/users/{user_id}/favorite/starship/{starship_id}")
            .unwrap()
            .methods,
        vec!["POST", "DELETE"]
    );
    assert_eq!(route("/admin/{view}").unwrap().methods, vec!["GET", "POST"]);
    assert_eq!(
        route("/admin/{view}/{id}").unwrap().methods,
        vec!["PUT", "DELETE"]
    );

    Ok(())
}

/// Expect a JSON 404 for a path matching no route
#[tokio::test]
async fn unknown_path_returns_json_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = send(test.into_app(), Method::GET, "/droids", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Not found");

    Ok(())
}

//! Tests for the admin surface.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        admin::{AdminGridDto, AdminIndexDto, AdminRowDto, AdminRowPayloadDto},
        api::{ErrorDto, MessageDto},
    },
    server::controller::{
        admin::{
            create_admin_row, delete_admin_row, get_admin_index, get_admin_view,
            update_admin_row,
        },
        util::path::Path,
    },
};
use serde_json::json;

use super::*;

/// Expect the index to list all five views under the configured title
#[tokio::test]
async fn index_lists_views() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let mut state = test.into_app_state();
    state.admin_title = "Imperial Records".to_string();

    let resp = get_admin_index(State(state)).await.into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let index: AdminIndexDto = body_json(resp).await;
    assert_eq!(index.name, "Imperial Records");
    assert_eq!(index.views.len(), 5);
    assert_eq!(index.views[0].columns, vec!["id", "name", "email", "is_active"]);

    Ok(())
}

/// Expect the planets grid to return each planet's ID & name
#[tokio::test]
async fn grid_lists_rows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Mustafar")
        .build()
        .await?;

    let resp = get_admin_view(State(test.into_app_state()), Path("planets".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let grid: AdminGridDto = body_json(resp).await;
    assert_eq!(grid.view, "planets");
    assert_eq!(grid.rows.len(), 1);
    assert_eq!(grid.rows[0]["name"], json!("Mustafar"));

    Ok(())
}

/// Expect 404 "Admin view not found" for an unknown view
#[tokio::test]
async fn unknown_view_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_admin_view(State(test.into_app_state()), Path("droids".to_string()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Admin view not found");

    Ok(())
}

/// Expect 201 and the created row through the routed POST
#[tokio::test]
async fn creates_person() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(
        test.into_app(),
        Method::POST,
        "/admin/people",
        Some(json!({ "name": "Mace Windu" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: AdminRowDto = body_json(resp).await;
    assert_eq!(created.view, "people");
    assert_eq!(created.row["name"], json!("Mace Windu"));

    Ok(())
}

/// Expect 201 for a user created through the admin surface, without the password echoed back
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(
        test.into_app(),
        Method::POST,
        "/admin/users",
        Some(json!({
            "name": "Ahsoka Tano",
            "email": "snips@togruta.net",
            "password": "fulcrum",
            "is_active": false
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: AdminRowDto = body_json(resp).await;
    assert_eq!(created.row["is_active"], json!(false));
    assert!(!created.row.contains_key("password"));

    Ok(())
}

/// Expect 201 for a favorite naming a user and one target
#[tokio::test]
async fn creates_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let starship = test.catalog().insert_starship("X-wing").await?;

    let resp = create_admin_row(
        State(test.into_app_state()),
        Path("favorites".to_string()),
        Ok(Json(AdminRowPayloadDto {
            user_id: Some(user.id),
            starship_id: Some(starship.id),
            ..Default::default()
        })),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: AdminRowDto = body_json(resp).await;
    assert_eq!(created.row["user_id"], json!(user.id));
    assert_eq!(created.row["starship_id"], json!(starship.id));

    Ok(())
}

/// Expect 400 for a favorite with two targets or a planet without a name
#[tokio::test]
async fn rejects_invalid_creation() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_admin_row(
        State(test.into_app_state()),
        Path("favorites".to_string()),
        Ok(Json(AdminRowPayloadDto {
            user_id: Some(1),
            planet_id: Some(1),
            starship_id: Some(1),
            ..Default::default()
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(
        body.error,
        "Favorite needs a user_id and exactly one of planet_id, people_id, or starship_id"
    );

    let resp = create_admin_row(
        State(test.into_app_state()),
        Path("planets".to_string()),
        Ok(Json(AdminRowPayloadDto::default())),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing name");

    Ok(())
}

/// Expect PUT to rename the starship and return the updated row
#[tokio::test]
async fn updates_starship() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let starship = test.catalog().insert_starship("Ghost").await?;

    let uri = format!("/admin/starships/{}", starship.id);
    let resp = send(
        test.into_app(),
        Method::PUT,
        &uri,
        Some(json!({ "name": "The Ghost" })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: AdminRowDto = body_json(resp).await;
    assert_eq!(updated.row["id"], json!(starship.id));
    assert_eq!(updated.row["name"], json!("The Ghost"));

    Ok(())
}

/// Expect 400 for an empty user field and 404 "Record not found" for a missing row
#[tokio::test]
async fn rejects_invalid_update() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;

    let resp = update_admin_row(
        State(test.into_app_state()),
        Path(("users".to_string(), user.id)),
        Ok(Json(AdminRowPayloadDto {
            password: Some(String::new()),
            ..Default::default()
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "password must not be empty");

    let resp = update_admin_row(
        State(test.into_app_state()),
        Path(("users".to_string(), user.id + 1)),
        Ok(Json(AdminRowPayloadDto {
            name: Some("Nobody".to_string()),
            ..Default::default()
        })),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Record not found");

    Ok(())
}

/// Expect DELETE to remove the person and the favorites pointing at them
#[tokio::test]
async fn deletes_person_with_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let person = test.catalog().insert_person("Ben Kenobi").await?;
    test.user().insert_person_favorite(user.id, person.id).await?;
    let app = test.into_app();

    let uri = format!("/admin/people/{}", person.id);
    let resp = send(app.clone(), Method::DELETE, &uri, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Record deleted");

    let resp = send(app.clone(), Method::GET, &format!("/people/{}", person.id), None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let favorites: serde_json::Value =
        body_json(send(app, Method::GET, &format!("/users/{}/favorites", user.id), None).await)
            .await;
    assert_eq!(favorites, json!([]));

    Ok(())
}

/// Expect 404 "Record not found" when deleting twice
#[tokio::test]
async fn delete_missing_row_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let planet = test.catalog().insert_planet("Jedha").await?;

    let first = delete_admin_row(
        State(test.into_app_state()),
        Path(("planets".to_string(), planet.id)),
    )
    .await
    .into_response();
    let second = delete_admin_row(
        State(test.into_app_state()),
        Path(("planets".to_string(), planet.id)),
    )
    .await
    .into_response();

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(second).await;
    assert_eq!(body.error, "Record not found");

    Ok(())
}

/// Expect a JSON 404 for a row ID that isn't an integer
#[tokio::test]
async fn non_integer_row_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(test.into_app(), Method::DELETE, "/admin/planets/abc", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Not found");

    Ok(())
}

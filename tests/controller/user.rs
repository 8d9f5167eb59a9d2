//! Tests for the user endpoints.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json,
};
use holocron::{
    model::{
        api::ErrorDto,
        favorite::FavoriteDto,
        user::{CreatedUserDto, UserDto},
    },
    server::controller::{
        user::{create_user, get_user_favorites, get_users},
        util::path::Path,
    },
};
use serde_json::{json, Map, Value};

use super::*;

fn payload(name: &str, email: &str, password: &str) -> Map<String, Value> {
    object(json!({ "name": name, "email": email, "password": password }))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

/// Expect 201 with the success message and a user without favorites
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_user(
        State(test.into_app_state()),
        Ok(Json(payload("Obi-Wan Kenobi", "ben@tatooine.net", "hellothere"))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: CreatedUserDto = body_json(resp).await;
    assert_eq!(body.message, "User created successfully");
    assert_eq!(body.user.email, "ben@tatooine.net");
    assert!(body.user.favorites.is_empty());

    Ok(())
}

/// Expect every valid payload to produce a user with an empty favorites list
#[tokio::test]
async fn created_users_start_without_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let payloads = [
        payload("Rey", "rey@jakku.net", "scavenger"),
        payload("Finn", "fn-2187@firstorder.mil", "traitor"),
        payload("Poe Dameron", "poe@resistance.org", "bb8"),
    ];

    for dto in payloads {
        let resp = create_user(State(test.into_app_state()), Ok(Json(dto)))
            .await
            .into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: CreatedUserDto = body_json(resp).await;
        assert!(body.user.favorites.is_empty());
    }

    Ok(())
}

/// Expect 400 "Missing name, email, or password" when a field is absent
#[tokio::test]
async fn missing_field_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = create_user(
        State(test.into_app_state()),
        Ok(Json(object(json!({
            "name": "Jar Jar",
            "email": "jarjar@naboo.gov"
        })))),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Missing name, email, or password");

    Ok(())
}

/// Expect 400 "No input data provided" when the request has no JSON body
#[tokio::test]
async fn missing_body_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(test.into_app(), Method::POST, "/users", None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "No input data provided");

    Ok(())
}

/// Expect 400 "No input data provided" for an empty JSON object
#[tokio::test]
async fn empty_object_is_missing_body() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(test.into_app(), Method::POST, "/users", Some(json!({}))).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "No input data provided");

    Ok(())
}

/// Expect whitespace-only fields to be accepted as present
#[tokio::test]
async fn whitespace_fields_are_accepted() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(
        test.into_app(),
        Method::POST,
        "/users",
        Some(json!({ "name": "  ", "email": "blank@void.net", "password": " " })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: CreatedUserDto = body_json(resp).await;
    assert_eq!(body.user.name, "  ");

    Ok(())
}

/// Expect 400 "Email already in use" instead of a second 201 for a duplicate email
#[tokio::test]
async fn duplicate_email_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("Leia Organa", "leia@alderaan.gov")
        .build()
        .await?;

    let resp = send(
        test.into_app(),
        Method::POST,
        "/users",
        Some(json!({
            "name": "Not Leia",
            "email": "leia@alderaan.gov",
            "password": "imposter"
        })),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Email already in use");

    Ok(())
}

/// Expect the user list to embed favorites and hide passwords
#[tokio::test]
async fn lists_users_with_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let person = test.catalog().insert_person("Yoda").await?;
    test.user().insert_person_favorite(user.id, person.id).await?;

    let resp = get_users(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert!(body[0].get("password").is_none());
    let users: Vec<UserDto> = serde_json::from_value(body).unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(
        users[0].favorites[0].people.as_ref().map(|p| p.name.as_str()),
        Some("Yoda")
    );

    Ok(())
}

/// Expect 200 with the user's favorites
#[tokio::test]
async fn gets_user_favorites() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let starship = test.catalog().insert_starship("X-wing").await?;
    test.user()
        .insert_starship_favorite(user.id, starship.id)
        .await?;

    let resp = get_user_favorites(State(test.into_app_state()), Path(user.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].starship.as_ref().map(|s| s.id), Some(starship.id));

    Ok(())
}

/// Expect 404 "User not found" for an unknown user
#[tokio::test]
async fn favorites_of_missing_user_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = get_user_favorites(State(test.into_app_state()), Path(42))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}

/// Expect a JSON 404 for a user ID that isn't an integer
#[tokio::test]
async fn non_integer_user_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let resp = send(test.into_app(), Method::GET, "/users/abc/favorites", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Not found");

    Ok(())
}

/// Expect a trailing slash to reach the same handler
#[tokio::test]
async fn trailing_slash_is_normalized() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("Leia Organa", "leia@alderaan.gov")
        .build()
        .await?;

    let resp = send(test.into_app(), Method::GET, "/users/", None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<UserDto> = body_json(resp).await;
    assert_eq!(users.len(), 1);

    Ok(())
}

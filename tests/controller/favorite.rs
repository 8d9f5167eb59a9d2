//! Tests for adding & removing favorites.

use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::IntoResponse,
};
use holocron::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::{CreatedFavoriteDto, FavoriteDto},
    },
    server::controller::{
        favorite::{
            add_favorite_person, add_favorite_planet, add_favorite_starship,
            remove_favorite_person, remove_favorite_planet, remove_favorite_starship,
        },
        util::path::Path,
    },
};
use serde_json::json;

use super::*;

/// Expect POST then GET to show exactly one favorite with the planet and null others
#[tokio::test]
async fn added_planet_is_listed() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    let app = test.into_app();

    let uri = format!("/users/{}/favorite/planet/{}", user.id, planet.id);
    let resp = send(app.clone(), Method::POST, &uri, None).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedFavoriteDto = body_json(resp).await;
    assert_eq!(created.message, "Planet added to favorites");

    let uri = format!("/users/{}/favorites", user.id);
    let resp = send(app, Method::GET, &uri, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: serde_json::Value = body_json(resp).await;
    assert_eq!(
        favorites,
        json!([{
            "id": created.favorite.id,
            "user_id": user.id,
            "planet": { "id": planet.id, "name": "Tatooine" },
            "people": null,
            "starship": null
        }])
    );

    Ok(())
}

/// Expect 201 then 400 "Planet already in favorites" for the same link twice
#[tokio::test]
async fn duplicate_planet_is_bad_request() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let first = add_favorite_planet(State(test.into_app_state()), Path((user.id, planet.id)))
        .await
        .into_response();
    let second = add_favorite_planet(State(test.into_app_state()), Path((user.id, planet.id)))
        .await
        .into_response();

    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(second).await;
    assert_eq!(body.error, "Planet already in favorites");

    Ok(())
}

/// Expect 404 "User or Planet not found" for an unknown user or planet
#[tokio::test]
async fn missing_user_or_planet_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    for (user_id, planet_id) in [(user.id + 1, planet.id), (user.id, planet.id + 1)] {
        let resp = add_favorite_planet(State(test.into_app_state()), Path((user_id, planet_id)))
            .await
            .into_response();

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: ErrorDto = body_json(resp).await;
        assert_eq!(body.error, "User or Planet not found");
    }

    Ok(())
}

/// Expect 200 "Planet removed from favorites" for an existing link
#[tokio::test]
async fn removes_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;
    test.user().insert_planet_favorite(user.id, planet.id).await?;

    let resp = remove_favorite_planet(State(test.into_app_state()), Path((user.id, planet.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Planet removed from favorites");

    Ok(())
}

/// Expect 404 when deleting a favorite that was never created
#[tokio::test]
async fn removing_missing_favorite_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let planet = test.catalog().insert_planet("Tatooine").await?;

    let resp = remove_favorite_planet(State(test.into_app_state()), Path((user.id, planet.id)))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet is not in favorites");

    Ok(())
}

/// Expect person favorites to use "Person" in every message
#[tokio::test]
async fn person_favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let person = test.catalog().insert_person("Yoda").await?;
    let ids = (user.id, person.id);

    let resp = add_favorite_person(State(test.into_app_state()), Path(ids))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedFavoriteDto = body_json(resp).await;
    assert_eq!(created.message, "Person added to favorites");
    assert_eq!(created.favorite.people.map(|p| p.id), Some(person.id));

    let resp = add_favorite_person(State(test.into_app_state()), Path(ids))
        .await
        .into_response();
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Person already in favorites");

    let resp = remove_favorite_person(State(test.into_app_state()), Path(ids))
        .await
        .into_response();
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Person removed from favorites");

    let resp = remove_favorite_person(State(test.into_app_state()), Path(ids))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Person is not in favorites");

    Ok(())
}

/// Expect starship favorites to use "Starship" in every message
#[tokio::test]
async fn starship_favorite_lifecycle() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let user = test.user().insert_user("Luke", "luke@tatooine.net").await?;
    let starship = test.catalog().insert_starship("X-wing").await?;

    let resp = add_favorite_starship(
        State(test.into_app_state()),
        Path((user.id, starship.id + 1)),
    )
    .await
    .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User or Starship not found");

    let resp = add_favorite_starship(State(test.into_app_state()), Path((user.id, starship.id)))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedFavoriteDto = body_json(resp).await;
    assert_eq!(created.message, "Starship added to favorites");

    let resp =
        remove_favorite_starship(State(test.into_app_state()), Path((user.id, starship.id)))
            .await
            .into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.message, "Starship removed from favorites");

    Ok(())
}

/// Expect the same ID across kinds to be tracked independently
#[tokio::test]
async fn kinds_do_not_collide() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_planet("Endor")
        .with_starship("Death Star II")
        .with_user("Lando", "lando@cloudcity.net")
        .build()
        .await?;

    // Every fixture is the first of its table so all IDs are 1
    let planet = add_favorite_planet(State(test.into_app_state()), Path((1, 1)))
        .await
        .into_response();
    let starship = add_favorite_starship(State(test.into_app_state()), Path((1, 1)))
        .await
        .into_response();

    assert_eq!(planet.status(), StatusCode::CREATED);
    assert_eq!(starship.status(), StatusCode::CREATED);

    let favorites: Vec<FavoriteDto> =
        body_json(send(test.into_app(), Method::GET, "/users/1/favorites", None).await).await;
    assert_eq!(favorites.len(), 2);

    Ok(())
}

/// Expect a JSON 404 and no favorite written when the target ID isn't an integer
#[tokio::test]
async fn non_integer_target_id_not_found() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .with_user("Lando", "lando@cloudcity.net")
        .build()
        .await?;
    let app = test.into_app();

    let resp = send(app.clone(), Method::POST, "/users/1/favorite/planet/xyz", None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Not found");

    let favorites: Vec<FavoriteDto> =
        body_json(send(app, Method::GET, "/users/1/favorites", None).await).await;
    assert!(favorites.is_empty());

    Ok(())
}

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminIndexDto {
    pub name: String,
    pub views: Vec<AdminViewDto>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminViewDto {
    pub name: String,
    pub endpoint: String,
    pub columns: Vec<String>,
}

/// Rows of a table restricted to the columns its admin view exposes
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminGridDto {
    pub view: String,
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub rows: Vec<Map<String, Value>>,
}

/// Request body for creating or editing a row through the admin surface.
///
/// Which fields apply depends on the view:
/// - `planets`, `people`, `starships`: `name`
/// - `users`: `name`, `email`, `password` & `is_active`
/// - `favorites`: `user_id` plus exactly one of `planet_id`, `people_id` & `starship_id`
///
/// Fields that don't apply to the view are ignored.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminRowPayloadDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub is_active: Option<bool>,
    pub user_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub people_id: Option<i32>,
    pub starship_id: Option<i32>,
}

/// A single row of an admin view, restricted to the view's columns
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AdminRowDto {
    pub view: String,
    #[schema(value_type = Object)]
    pub row: Map<String, Value>,
}

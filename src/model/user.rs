use serde::{Deserialize, Serialize};

use crate::model::favorite::FavoriteDto;

/// A user with all of their favorites; the password is never serialized
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub favorites: Vec<FavoriteDto>,
}

impl UserDto {
    pub fn from_parts(user: entity::user::Model, favorites: Vec<FavoriteDto>) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            favorites,
        }
    }
}

/// Request body for creating a user.
///
/// Every field is optional at the parsing level so that missing fields surface as a validation
/// error instead of a deserialization rejection.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body after a user is created
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedUserDto {
    pub message: String,
    pub user: UserDto,
}

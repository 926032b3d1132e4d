//! User - Account with username and email

use roster::{FieldPatch, NewUser, RecordId, User, UserPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Create User request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "user3")]
    pub username: String,
    #[schema(example = "user3@example.com")]
    pub email: String,
}

impl From<CreateUserRequest> for NewUser {
    fn from(req: CreateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

/// Update User request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub username: FieldPatch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: FieldPatch<String>,
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(req: UpdateUserRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
        }
    }
}

/// User response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct UserResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: RecordId,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

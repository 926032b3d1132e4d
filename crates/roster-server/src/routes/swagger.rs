//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    CreateItemRequest,
    CreateUserRequest,
    ErrorResponse,
    // Item models
    ItemResponse,
    UpdateItemRequest,
    UpdateUserRequest,
    // User models
    UserResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Item endpoints
        super::item::list_items,
        super::item::create_item,
        super::item::get_item,
        super::item::update_item,
        super::item::delete_item,
        // User endpoints
        super::user::list_users,
        super::user::create_user,
        super::user::get_user,
        super::user::update_user,
        super::user::delete_user,
    ),
    info(
        title = "Roster API",
        version = "0.1.0",
        description = "In-memory Item and User collections with partial updates.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Item", description = "Item management"),
        (name = "User", description = "User management"),
    ),
    components(
        schemas(
            // Item
            CreateItemRequest,
            UpdateItemRequest,
            ItemResponse,
            // User
            CreateUserRequest,
            UpdateUserRequest,
            UserResponse,
            // Errors
            ErrorResponse,
        )
    ),
)]
pub struct ApiDoc;

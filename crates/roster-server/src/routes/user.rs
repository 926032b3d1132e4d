//! User Routes
//!
//! HTTP handlers that delegate to the User RecordService.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use roster::RecordId;

use super::{api_error, ApiError};
use crate::models::{CreateUserRequest, ErrorResponse, UpdateUserRequest, UserResponse};
use crate::AppState;

/// List all Users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of all Users", body = Vec<UserResponse>)
    ),
    tag = "User"
)]
pub async fn list_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Vec<UserResponse>> {
    tracing::debug!(?headers, "Listing users");

    let users = state.user_service.list_all().await;
    Json(users.into_iter().map(UserResponse::from).collect())
}

/// Create new User
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "User"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Json<UserResponse> {
    let user = state.user_service.create(payload.into()).await;
    Json(user.into())
}

/// Get User by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.get_by_id(id).await.map_err(api_error)?;
    Ok(Json(user.into()))
}

/// Update User
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "User"
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state
        .user_service
        .update(id, payload.into())
        .await
        .map_err(api_error)?;

    Ok(Json(user.into()))
}

/// Delete User
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "Removed User", body = UserResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    tag = "User"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.user_service.delete(id).await.map_err(api_error)?;
    Ok(Json(user.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

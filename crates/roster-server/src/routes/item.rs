//! Item Routes
//!
//! HTTP handlers that delegate to the Item RecordService.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    routing::get,
    Json, Router,
};
use roster::RecordId;

use super::{api_error, ApiError};
use crate::models::{CreateItemRequest, ErrorResponse, ItemResponse, UpdateItemRequest};
use crate::AppState;

/// List all Items
#[utoipa::path(
    get,
    path = "/items",
    responses(
        (status = 200, description = "List of all Items", body = Vec<ItemResponse>)
    ),
    tag = "Item"
)]
pub async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<Vec<ItemResponse>> {
    tracing::debug!(?headers, "Listing items");

    let items = state.item_service.list_all().await;
    Json(items.into_iter().map(ItemResponse::from).collect())
}

/// Create new Item
#[utoipa::path(
    post,
    path = "/items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "Item created", body = ItemResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Item"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateItemRequest>,
) -> Json<ItemResponse> {
    let item = state.item_service.create(payload.into()).await;
    Json(item.into())
}

/// Get Item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "Item"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.item_service.get_by_id(id).await.map_err(api_error)?;
    Ok(Json(item.into()))
}

/// Update Item
#[utoipa::path(
    put,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    request_body = UpdateItemRequest,
    responses(
        (status = 200, description = "Item updated", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 422, description = "Invalid request body")
    ),
    tag = "Item"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
    Json(payload): Json<UpdateItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state
        .item_service
        .update(id, payload.into())
        .await
        .map_err(api_error)?;

    Ok(Json(item.into()))
}

/// Delete Item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    params(("id" = i64, Path, description = "Item ID")),
    responses(
        (status = 200, description = "Removed Item", body = ItemResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "Item"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<RecordId>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item = state.item_service.delete(id).await.map_err(api_error)?;
    Ok(Json(item.into()))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
}

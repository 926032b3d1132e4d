//! Item - Named thing with an optional description

use roster::{FieldPatch, Item, ItemPatch, NewItem, RecordId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================
// Request/Response DTOs
// ============================================

/// Create Item request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[schema(example = "Item 3")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(req: CreateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Update Item request
///
/// Only keys present in the body are applied. `"description": null` clears
/// the description.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateItemRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: FieldPatch<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: FieldPatch<Option<String>>,
}

impl From<UpdateItemRequest> for ItemPatch {
    fn from(req: UpdateItemRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
        }
    }
}

/// Item response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct ItemResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: RecordId,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
        }
    }
}

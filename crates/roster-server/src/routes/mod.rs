//! Roster API Routes
//!
//! - /items - Item management
//! - /users - User management

use axum::{http::StatusCode, Json};
use roster::DomainError;

use crate::models::ErrorResponse;

pub mod item;
pub mod swagger;
pub mod user;

/// Error half of every handler result
pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Map a domain error to its HTTP representation
pub fn api_error(err: DomainError) -> ApiError {
    match err {
        DomainError::NotFound { entity_type, .. } => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(format!("{} not found", entity_type))),
        ),
    }
}

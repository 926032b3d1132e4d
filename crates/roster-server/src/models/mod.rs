//! Roster Data Models
//!
//! Request/response bodies for the HTTP API.
//! - Item: named thing with an optional description
//! - User: account with username and email

mod error;
mod item;
mod user;

pub use error::*;
pub use item::*;
pub use user::*;

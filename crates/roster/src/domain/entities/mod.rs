//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Record: identity and merge contract shared by every stored kind
//! - Item: named thing with an optional description
//! - User: account with username and email

mod item;
mod record;
mod user;

pub use item::*;
pub use record::*;
pub use user::*;

//! Roster Domain Library
//!
//! Core domain types and interfaces for the Roster record service.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure records and merge logic
//!   - `entities/`: Item, User and the `Record` trait they share
//!   - `value_objects/`: `FieldPatch` for partial updates
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Record storage interface
//!
//! # Usage
//!
//! ```rust,ignore
//! use roster::{Item, ItemPatch, RecordRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    DomainError, FieldPatch, Item, ItemPatch, NewItem, NewUser, Record, RecordId, User, UserPatch,
};
pub use ports::RecordRepository;

//! Repository Ports
//!
//! Abstract interfaces for record storage operations.

mod record_repository;

pub use record_repository::*;

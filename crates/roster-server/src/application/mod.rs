//! Application Layer (Use Cases)
//!
//! Orchestrates record operations on top of the repository ports.

mod record_service;

pub use record_service::RecordService;

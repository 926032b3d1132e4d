//! Infrastructure Adapters
//!
//! Implementations of domain ports for process-local storage.

pub mod memory;

// Re-exports
pub use memory::InMemoryRecordRepository;

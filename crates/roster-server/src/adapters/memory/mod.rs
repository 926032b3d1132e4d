//! In-Memory Repository Implementations

mod record_repository;

pub use record_repository::InMemoryRecordRepository;

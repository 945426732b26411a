//! Record storage adapters that need no database.
//!
//! - `JsonFileRepository` - one JSON array file per resource (local development)
//! - `InMemoryRepository` - volatile storage for tests

mod in_memory_repository;
mod json_file_repository;

pub use in_memory_repository::InMemoryRepository;
pub use json_file_repository::JsonFileRepository;

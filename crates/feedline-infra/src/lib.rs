//! # Feedline Infrastructure
//!
//! Concrete implementations of the storage ports defined in `feedline-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;

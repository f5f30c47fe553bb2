//! Post storage: an in-memory store and the SeaORM-backed PostgreSQL store.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use memory::InMemoryPostRepository;

pub use connections::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use connections::connect;
#[cfg(feature = "postgres")]
pub use postgres_base::{DomainEntity, PostgresBaseRepository};
#[cfg(feature = "postgres")]
pub use postgres_repo::PostgresPostRepository;

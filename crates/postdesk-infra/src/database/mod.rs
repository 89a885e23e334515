//! Record stores: SeaORM/PostgreSQL and in-memory.

mod memory;

#[cfg(feature = "postgres")]
mod connections;
#[cfg(feature = "postgres")]
pub mod entity;
#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
mod postgres_store;

pub use memory::{InMemoryPostStore, InMemoryStore, InMemoryUserStore};

#[cfg(feature = "postgres")]
pub use connections::{DatabaseConfig, DatabaseConnections};
#[cfg(feature = "postgres")]
pub use postgres_base::PostgresStore;
#[cfg(feature = "postgres")]
pub use postgres_store::{PostgresPostStore, PostgresUserStore};

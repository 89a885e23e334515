//! # Postdesk Infrastructure
//!
//! Concrete implementations of the ports defined in `postdesk-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL record stores via SeaORM
//! - `auth` - Argon2 password hashing

pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{InMemoryPostStore, InMemoryStore, InMemoryUserStore};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, PostgresPostStore, PostgresUserStore};

#[cfg(feature = "auth")]
pub use auth::Argon2PasswordService;

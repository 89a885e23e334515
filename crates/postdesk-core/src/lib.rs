//! # Postdesk Core
//!
//! The domain layer of Postdesk.
//! This crate holds the entities, the resource services and the ports that
//! infrastructure adapters implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{CrudService, PostService, UserService};

//! SeaORM entities and their conversions to domain records.

pub mod post;
pub mod user;

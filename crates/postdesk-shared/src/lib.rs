//! # Postdesk Shared
//!
//! Wire types shared between the server and its clients: request bodies,
//! query parameters and response envelopes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, CountedResponse, ErrorResponse, MessageResponse, PagedResponse};

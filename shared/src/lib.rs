//! Shared types for the staff directory service
//!
//! Domain entities, request/response DTOs and the HTTP error taxonomy
//! used by the server and by anything talking to it.

pub mod error;
pub mod models;

//! Data models
//!
//! Domain entities (what the repository stores) and the request/response
//! DTOs exchanged over HTTP. All IDs are `i32` (PostgreSQL SERIAL),
//! assigned by the store.

pub mod company;
pub mod department;
pub mod employee;

// Re-exports
pub use company::*;
pub use department::*;
pub use employee::*;

use serde::{Deserialize, Serialize};

/// `{"id": ...}` body returned by create endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseId {
    pub id: i32,
}

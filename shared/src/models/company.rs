//! Company Model
//!
//! Companies are only created and referenced by id, so the payload is the
//! whole model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create company payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CreateCompany {
    #[validate(length(min = 1))]
    pub name: String,
}

//! Application state

use std::sync::Arc;

use sqlx::PgPool;

use crate::repository::{EmployeeRepository, PgRepository};
use crate::usecase::EmployeeService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: EmployeeService,
}

impl AppState {
    /// State backed by PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgRepository::new(pool)))
    }

    pub fn with_repository(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            service: EmployeeService::new(repo),
        }
    }
}

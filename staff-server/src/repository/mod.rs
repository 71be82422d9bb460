//! Repository Module
//!
//! Maps domain entities to store rows and owns transaction boundaries.
//! [`EmployeeRepository`] is the seam between the usecase layer and a
//! storage backend: [`PgRepository`] in production, an in-memory fake in
//! tests.

mod merge;
mod postgres;

#[cfg(test)]
pub(crate) mod memory;

pub use merge::merge_on_empty;
pub use postgres::PgRepository;

use async_trait::async_trait;
use shared::error::{AppError, ErrorCode};
use shared::models::{Department, Employee};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// No row matches the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// FK / not-null / check / unique constraint rejected the write
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Serializable transaction aborted by a concurrent writer
    #[error("Transaction conflict: {0}")]
    Conflict(String),

    /// Connection, pool or protocol failure
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db_err) => {
                let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
                match code.as_str() {
                    // serialization_failure, deadlock_detected
                    "40001" | "40P01" => RepoError::Conflict(db_err.message().to_string()),
                    // integrity constraint violations and data exceptions
                    c if c.starts_with("23") || c.starts_with("22") => {
                        RepoError::ConstraintViolation(db_err.message().to_string())
                    }
                    // connection exceptions, admin shutdown
                    c if c.starts_with("08") || c.starts_with("57P") => {
                        RepoError::StoreUnavailable(db_err.message().to_string())
                    }
                    _ => RepoError::Database(err.to_string()),
                }
            }
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => RepoError::StoreUnavailable(err.to_string()),
            _ => RepoError::Database(err.to_string()),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(_) => AppError::new(ErrorCode::NotFound),
            RepoError::ConstraintViolation(_) => AppError::new(ErrorCode::ValidationFailed),
            RepoError::Conflict(_) => AppError::new(ErrorCode::TransactionConflict),
            RepoError::StoreUnavailable(_) => AppError::new(ErrorCode::StoreUnavailable),
            RepoError::Database(_) => AppError::new(ErrorCode::DatabaseError),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Storage capability for companies, departments and employees
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Insert an employee. A department with `id == 0` is inserted first,
    /// scoped to the employee's company, in the same transaction.
    async fn create_employee(&self, employee: &Employee) -> RepoResult<i32>;

    /// Fetch one employee joined with its department.
    async fn get_employee_by_id(&self, id: i32) -> RepoResult<Employee>;

    /// Merge-on-empty update of `employee.id`, read and write in one
    /// serializable transaction.
    async fn edit_employee(&self, employee: &Employee) -> RepoResult<()>;

    /// Delete an employee. A missing id is `NotFound`.
    async fn delete_employee(&self, id: i32) -> RepoResult<()>;

    /// All employees of a company. `NotFound` if the company does not exist.
    async fn list_company_employees(&self, company_id: i32) -> RepoResult<Vec<Employee>>;

    /// All employees of a department. `NotFound` if the department does not exist.
    async fn list_department_employees(&self, department_id: i32) -> RepoResult<Vec<Employee>>;

    async fn create_company(&self, name: &str) -> RepoResult<i32>;

    async fn create_department(&self, department: &Department) -> RepoResult<i32>;
}

//! Store accessor
//!
//! Parameterized statements against PostgreSQL, one module per table.
//! Functions take any `PgExecutor` so the repository can run them either
//! on the pool or inside a transaction (`&mut *tx`). No business logic here.

pub mod company;
pub mod department;
pub mod employee;
pub mod tx;

pub use tx::begin_serializable;

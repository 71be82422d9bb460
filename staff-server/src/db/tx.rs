//! Transaction helpers

use sqlx::{PgPool, Postgres, Transaction};

/// Begin a read-write transaction at SERIALIZABLE isolation.
///
/// The returned transaction rolls back when dropped without `commit()`,
/// so an early `?` return (or a dropped request future) never leaves a
/// partially applied write behind.
pub async fn begin_serializable(pool: &PgPool) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE, READ WRITE")
        .execute(&mut *tx)
        .await?;
    Ok(tx)
}

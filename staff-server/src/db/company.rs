//! Company table operations

use sqlx::PgExecutor;

pub async fn insert<'e>(executor: impl PgExecutor<'e>, name: &str) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as("INSERT INTO companies (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}

pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM companies WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}

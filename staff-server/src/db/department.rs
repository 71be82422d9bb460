//! Department table operations

use sqlx::PgExecutor;

pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    name: &str,
    phone: &str,
    company_id: i32,
) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO departments (name, phone, company_id)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(phone)
    .bind(company_id)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}

pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: i32) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM departments WHERE id = $1)")
        .bind(id)
        .fetch_one(executor)
        .await?;
    Ok(row.0)
}

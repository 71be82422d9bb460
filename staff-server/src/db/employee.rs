//! Employee table operations (normalized columns, joined with departments on read)

use shared::models::{Department, Employee, Passport};
use sqlx::PgExecutor;

/// Employee row joined with its department's name and phone
#[derive(Debug, sqlx::FromRow)]
pub struct EmployeeRow {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    pub department_id: i32,
    pub passport_type: String,
    pub passport_number: String,
    pub department_name: String,
    pub department_phone: String,
}

impl From<EmployeeRow> for Employee {
    fn from(row: EmployeeRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            surname: row.surname,
            phone: row.phone,
            company_id: row.company_id,
            passport: Passport {
                kind: row.passport_type,
                number: row.passport_number,
            },
            department: Department {
                id: row.department_id,
                name: row.department_name,
                phone: row.department_phone,
                company_id: row.company_id,
            },
        }
    }
}

/// Employee/department join followed by the given clause
macro_rules! select_joined {
    ($clause:literal) => {
        concat!(
            "SELECT e.id, e.name, e.surname, e.phone, e.company_id, e.department_id, ",
            "e.passport_type, e.passport_number, ",
            "d.name AS department_name, d.phone AS department_phone ",
            "FROM employees e JOIN departments d ON d.id = e.department_id ",
            $clause
        )
    };
}

/// Insert an employee referencing `department_id`, returning the new id.
pub async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    employee: &Employee,
    department_id: i32,
) -> Result<i32, sqlx::Error> {
    let row: (i32,) = sqlx::query_as(
        r#"
        INSERT INTO employees (
            name, surname, phone, company_id, department_id,
            passport_type, passport_number
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(&employee.name)
    .bind(&employee.surname)
    .bind(&employee.phone)
    .bind(employee.company_id)
    .bind(department_id)
    .bind(&employee.passport.kind)
    .bind(&employee.passport.number)
    .fetch_one(executor)
    .await?;
    Ok(row.0)
}

pub async fn find_by_id<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as(select_joined!("WHERE e.id = $1"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Same as [`find_by_id`] but locks the employee row until the
/// surrounding transaction ends.
pub async fn find_by_id_for_update<'e>(
    executor: impl PgExecutor<'e>,
    id: i32,
) -> Result<Option<EmployeeRow>, sqlx::Error> {
    sqlx::query_as(select_joined!("WHERE e.id = $1 FOR UPDATE OF e"))
        .bind(id)
        .fetch_optional(executor)
        .await
}

/// Overwrite every scalar column of an employee. Returns rows affected.
pub async fn update<'e>(
    executor: impl PgExecutor<'e>,
    employee: &Employee,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE employees SET
            name = $1, surname = $2, phone = $3,
            company_id = $4, department_id = $5,
            passport_type = $6, passport_number = $7,
            updated_at = now()
        WHERE id = $8
        "#,
    )
    .bind(&employee.name)
    .bind(&employee.surname)
    .bind(&employee.phone)
    .bind(employee.company_id)
    .bind(employee.department.id)
    .bind(&employee.passport.kind)
    .bind(&employee.passport.number)
    .bind(employee.id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Delete an employee. Returns rows affected.
pub async fn delete<'e>(executor: impl PgExecutor<'e>, id: i32) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn list_by_company<'e>(
    executor: impl PgExecutor<'e>,
    company_id: i32,
) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as(select_joined!("WHERE e.company_id = $1 ORDER BY e.id"))
        .bind(company_id)
        .fetch_all(executor)
        .await
}

pub async fn list_by_department<'e>(
    executor: impl PgExecutor<'e>,
    department_id: i32,
) -> Result<Vec<EmployeeRow>, sqlx::Error> {
    sqlx::query_as(select_joined!("WHERE e.department_id = $1 ORDER BY e.id"))
        .bind(department_id)
        .fetch_all(executor)
        .await
}

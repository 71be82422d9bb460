//! PostgreSQL-backed repository

use async_trait::async_trait;
use shared::models::{Department, Employee};
use sqlx::PgPool;

use super::{EmployeeRepository, RepoError, RepoResult, merge_on_empty};
use crate::db;

/// Repository over a PostgreSQL connection pool
#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for PgRepository {
    async fn create_employee(&self, employee: &Employee) -> RepoResult<i32> {
        if employee.department.id != 0 {
            let id = db::employee::insert(&self.pool, employee, employee.department.id).await?;
            return Ok(id);
        }

        // Department first, then the employee referencing it, as one unit
        let mut tx = db::begin_serializable(&self.pool).await?;
        let department_id = db::department::insert(
            &mut *tx,
            &employee.department.name,
            &employee.department.phone,
            employee.company_id,
        )
        .await?;
        let id = db::employee::insert(&mut *tx, employee, department_id).await?;
        tx.commit().await?;

        tracing::debug!(employee_id = id, department_id, "Created employee with new department");
        Ok(id)
    }

    async fn get_employee_by_id(&self, id: i32) -> RepoResult<Employee> {
        db::employee::find_by_id(&self.pool, id)
            .await?
            .map(Employee::from)
            .ok_or_else(|| RepoError::NotFound(format!("employee {id}")))
    }

    async fn edit_employee(&self, employee: &Employee) -> RepoResult<()> {
        let mut tx = db::begin_serializable(&self.pool).await?;

        let stored: Employee = db::employee::find_by_id_for_update(&mut *tx, employee.id)
            .await?
            .map(Employee::from)
            .ok_or_else(|| RepoError::NotFound(format!("employee {}", employee.id)))?;

        let merged = merge_on_empty(&stored, employee);
        db::employee::update(&mut *tx, &merged).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn delete_employee(&self, id: i32) -> RepoResult<()> {
        let rows = db::employee::delete(&self.pool, id).await?;
        if rows == 0 {
            return Err(RepoError::NotFound(format!("employee {id}")));
        }
        Ok(())
    }

    async fn list_company_employees(&self, company_id: i32) -> RepoResult<Vec<Employee>> {
        // Companies are never deleted, so the existence check cannot go stale
        if !db::company::exists(&self.pool, company_id).await? {
            return Err(RepoError::NotFound(format!("company {company_id}")));
        }
        let rows = db::employee::list_by_company(&self.pool, company_id).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn list_department_employees(&self, department_id: i32) -> RepoResult<Vec<Employee>> {
        if !db::department::exists(&self.pool, department_id).await? {
            return Err(RepoError::NotFound(format!("department {department_id}")));
        }
        let rows = db::employee::list_by_department(&self.pool, department_id).await?;
        Ok(rows.into_iter().map(Employee::from).collect())
    }

    async fn create_company(&self, name: &str) -> RepoResult<i32> {
        Ok(db::company::insert(&self.pool, name).await?)
    }

    async fn create_department(&self, department: &Department) -> RepoResult<i32> {
        Ok(db::department::insert(
            &self.pool,
            &department.name,
            &department.phone,
            department.company_id,
        )
        .await?)
    }
}

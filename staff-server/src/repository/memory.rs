//! In-memory repository for tests
//!
//! Enforces the same reference rules as the PostgreSQL schema so handler
//! and usecase tests see the same error contract.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::models::{Department, Employee};

use super::{EmployeeRepository, RepoError, RepoResult, merge_on_empty};

#[derive(Default)]
struct Tables {
    companies: BTreeMap<i32, String>,
    departments: BTreeMap<i32, Department>,
    /// Employees as stored; department name/phone are joined on read
    employees: BTreeMap<i32, Employee>,
    next_company_id: i32,
    next_department_id: i32,
    next_employee_id: i32,
}

impl Tables {
    fn check_department(&self, name: &str, company_id: i32) -> RepoResult<()> {
        if name.is_empty() {
            return Err(RepoError::ConstraintViolation("department name is empty".into()));
        }
        if !self.companies.contains_key(&company_id) {
            return Err(RepoError::ConstraintViolation(format!(
                "company {company_id} does not exist"
            )));
        }
        Ok(())
    }

    fn check_employee(&self, company_id: i32, department_id: i32) -> RepoResult<()> {
        if !self.companies.contains_key(&company_id) {
            return Err(RepoError::ConstraintViolation(format!(
                "company {company_id} does not exist"
            )));
        }
        match self.departments.get(&department_id) {
            Some(d) if d.company_id == company_id => Ok(()),
            _ => Err(RepoError::ConstraintViolation(format!(
                "department {department_id} does not belong to company {company_id}"
            ))),
        }
    }

    fn insert_department(&mut self, name: &str, phone: &str, company_id: i32) -> i32 {
        self.next_department_id += 1;
        let id = self.next_department_id;
        self.departments.insert(
            id,
            Department {
                id,
                name: name.to_string(),
                phone: phone.to_string(),
                company_id,
            },
        );
        id
    }

    fn joined(&self, employee: &Employee) -> Employee {
        let mut joined = employee.clone();
        if let Some(d) = self.departments.get(&employee.department.id) {
            joined.department = d.clone();
        }
        joined
    }
}

/// Mutex-guarded tables; every operation is atomic with respect to others
#[derive(Default)]
pub struct MemoryRepository {
    tables: Mutex<Tables>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for MemoryRepository {
    async fn create_employee(&self, employee: &Employee) -> RepoResult<i32> {
        let mut t = self.tables.lock();

        let department_id = if employee.department.id == 0 {
            // Validate both rows before writing either
            t.check_department(&employee.department.name, employee.company_id)?;
            None
        } else {
            t.check_employee(employee.company_id, employee.department.id)?;
            Some(employee.department.id)
        };
        let department_id = match department_id {
            Some(id) => id,
            None => t.insert_department(
                &employee.department.name,
                &employee.department.phone,
                employee.company_id,
            ),
        };

        t.next_employee_id += 1;
        let id = t.next_employee_id;
        let mut stored = employee.clone();
        stored.id = id;
        stored.department = Department {
            id: department_id,
            company_id: employee.company_id,
            ..Department::default()
        };
        t.employees.insert(id, stored);
        Ok(id)
    }

    async fn get_employee_by_id(&self, id: i32) -> RepoResult<Employee> {
        let t = self.tables.lock();
        t.employees
            .get(&id)
            .map(|e| t.joined(e))
            .ok_or_else(|| RepoError::NotFound(format!("employee {id}")))
    }

    async fn edit_employee(&self, employee: &Employee) -> RepoResult<()> {
        let mut t = self.tables.lock();
        let stored = t
            .employees
            .get(&employee.id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(format!("employee {}", employee.id)))?;

        let merged = merge_on_empty(&stored, employee);
        t.check_employee(merged.company_id, merged.department.id)?;
        t.employees.insert(merged.id, merged);
        Ok(())
    }

    async fn delete_employee(&self, id: i32) -> RepoResult<()> {
        self.tables
            .lock()
            .employees
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepoError::NotFound(format!("employee {id}")))
    }

    async fn list_company_employees(&self, company_id: i32) -> RepoResult<Vec<Employee>> {
        let t = self.tables.lock();
        if !t.companies.contains_key(&company_id) {
            return Err(RepoError::NotFound(format!("company {company_id}")));
        }
        Ok(t.employees
            .values()
            .filter(|e| e.company_id == company_id)
            .map(|e| t.joined(e))
            .collect())
    }

    async fn list_department_employees(&self, department_id: i32) -> RepoResult<Vec<Employee>> {
        let t = self.tables.lock();
        if !t.departments.contains_key(&department_id) {
            return Err(RepoError::NotFound(format!("department {department_id}")));
        }
        Ok(t.employees
            .values()
            .filter(|e| e.department.id == department_id)
            .map(|e| t.joined(e))
            .collect())
    }

    async fn create_company(&self, name: &str) -> RepoResult<i32> {
        if name.is_empty() {
            return Err(RepoError::ConstraintViolation("company name is empty".into()));
        }
        let mut t = self.tables.lock();
        t.next_company_id += 1;
        let id = t.next_company_id;
        t.companies.insert(id, name.to_string());
        Ok(id)
    }

    async fn create_department(&self, department: &Department) -> RepoResult<i32> {
        let mut t = self.tables.lock();
        t.check_department(&department.name, department.company_id)?;
        Ok(t.insert_department(&department.name, &department.phone, department.company_id))
    }
}

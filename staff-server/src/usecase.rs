//! Usecase layer
//!
//! Turns request DTOs into domain entities and forwards them to the
//! repository. Results and errors pass through unchanged.

use std::sync::Arc;

use shared::models::{CreateDepartment, CreateEmployee, Department, Employee};

use crate::repository::{EmployeeRepository, RepoResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_employee(&self, data: CreateEmployee) -> RepoResult<i32> {
        self.repo.create_employee(&employee_from_dto(0, data)).await
    }

    pub async fn get_employee(&self, id: i32) -> RepoResult<Employee> {
        self.repo.get_employee_by_id(id).await
    }

    /// `id` comes from the path; zero-valued fields in `data` keep the
    /// stored value.
    pub async fn edit_employee(&self, id: i32, data: CreateEmployee) -> RepoResult<()> {
        self.repo.edit_employee(&employee_from_dto(id, data)).await
    }

    pub async fn delete_employee(&self, id: i32) -> RepoResult<()> {
        self.repo.delete_employee(id).await
    }

    pub async fn list_company_employees(&self, company_id: i32) -> RepoResult<Vec<Employee>> {
        self.repo.list_company_employees(company_id).await
    }

    pub async fn list_department_employees(&self, department_id: i32) -> RepoResult<Vec<Employee>> {
        self.repo.list_department_employees(department_id).await
    }

    pub async fn create_company(&self, name: &str) -> RepoResult<i32> {
        self.repo.create_company(name).await
    }

    pub async fn create_department(&self, data: CreateDepartment) -> RepoResult<i32> {
        let department = Department {
            id: 0,
            name: data.name,
            phone: data.phone,
            company_id: data.company_id,
        };
        self.repo.create_department(&department).await
    }
}

fn employee_from_dto(id: i32, data: CreateEmployee) -> Employee {
    let info = data.department.unwrap_or_default();
    Employee {
        id,
        name: data.name,
        surname: data.surname,
        phone: data.phone,
        company_id: data.company_id,
        passport: data.passport,
        department: Department {
            id: data.department_id,
            name: info.name,
            phone: info.phone,
            company_id: data.company_id,
        },
    }
}

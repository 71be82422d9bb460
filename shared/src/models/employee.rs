//! Employee Model

use serde::{Deserialize, Serialize};

use super::department::{Department, DepartmentInfo};

/// Identity document of an employee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passport {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub number: String,
}

/// Employee entity
///
/// Belongs to one company and one department. The embedded department
/// carries the joined name/phone on reads; on create, a department with
/// `id == 0` is inserted together with the employee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    pub passport: Passport,
    pub department: Department,
}

/// Create/edit employee payload
///
/// Absent fields decode to their zero value. On edit, a zero value means
/// "keep the stored value".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEmployee {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    pub passport: Passport,
    pub department_id: i32,
    /// Department to create alongside the employee when `department_id` is 0.
    /// Create only; an edit carrying it is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentInfo>,
}

/// Employee as returned by read endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeResponse {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub company_id: i32,
    pub passport: Passport,
    pub department: DepartmentInfo,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id,
            name: e.name,
            surname: e.surname,
            phone: e.phone,
            company_id: e.company_id,
            passport: e.passport,
            department: DepartmentInfo {
                name: e.department.name,
                phone: e.department.phone,
            },
        }
    }
}

//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity, belongs to exactly one company
///
/// `id == 0` means the department has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub company_id: i32,
}

/// Create department payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDepartment {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company_id: i32,
}

/// Department fields embedded in an employee response, and the optional
/// department description accepted when creating an employee
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
}

//! Row types for the five sample tables.
//!
//! Field names match column names so each type can be read back with
//! [`sqlx::FromRow`].

use serde::{Deserialize, Serialize};
use time::Date;

/// A row of `departments`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
    pub location: Option<String>,
}

/// A row of `employees`. `manager_id` points at another employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Employee {
    pub employee_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub hire_date: Date,
    pub department_id: Option<i64>,
    pub job_title: String,
    pub manager_id: Option<i64>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A row of `salaries`. Several rows per employee form a history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Salary {
    pub salary_id: i64,
    pub employee_id: i64,
    pub salary: f64,
    pub effective_date: Date,
}

/// A row of `projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    pub project_id: i64,
    pub project_name: String,
    pub department_id: Option<i64>,
    pub start_date: Date,
    pub end_date: Date,
    pub budget: f64,
}

/// A row of the `employee_projects` junction table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EmployeeProject {
    pub employee_id: i64,
    pub project_id: i64,
    pub role: String,
    pub hours_allocated: i64,
}

//! The fixed sample organization: six departments, a three-level reporting
//! structure, one salary record per employee, and one project per department
//! (two for Engineering).

use time::Date;
use time::macros::date;

use crate::models::{Department, Employee, EmployeeProject, Project, Salary};

fn department(id: i64, name: &str, location: &str) -> Department {
    Department {
        department_id: id,
        department_name: name.to_string(),
        location: Some(location.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
    hire_date: Date,
    department_id: i64,
    job_title: &str,
    manager_id: Option<i64>,
) -> Employee {
    Employee {
        employee_id: id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        hire_date,
        department_id: Some(department_id),
        job_title: job_title.to_string(),
        manager_id,
    }
}

fn salary(id: i64, employee_id: i64, amount: f64, effective_date: Date) -> Salary {
    Salary {
        salary_id: id,
        employee_id,
        salary: amount,
        effective_date,
    }
}

fn project(
    id: i64,
    name: &str,
    department_id: i64,
    start_date: Date,
    end_date: Date,
    budget: f64,
) -> Project {
    Project {
        project_id: id,
        project_name: name.to_string(),
        department_id: Some(department_id),
        start_date,
        end_date,
        budget,
    }
}

fn assignment(employee_id: i64, project_id: i64, role: &str, hours: i64) -> EmployeeProject {
    EmployeeProject {
        employee_id,
        project_id,
        role: role.to_string(),
        hours_allocated: hours,
    }
}

pub(crate) fn departments() -> Vec<Department> {
    vec![
        department(1, "Engineering", "San Francisco"),
        department(2, "Sales", "New York"),
        department(3, "Marketing", "Los Angeles"),
        department(4, "Human Resources", "Chicago"),
        department(5, "Finance", "Boston"),
        department(6, "Customer Support", "Austin"),
    ]
}

#[rustfmt::skip]
pub(crate) fn employees() -> Vec<Employee> {
    vec![
        // Engineering
        employee(1, "John", "Smith", "john.smith@company.com", date!(2020-01-15), 1, "Engineering Manager", None),
        employee(2, "Sarah", "Johnson", "sarah.johnson@company.com", date!(2020-03-20), 1, "Senior Software Engineer", Some(1)),
        employee(3, "Michael", "Williams", "michael.williams@company.com", date!(2021-06-10), 1, "Software Engineer", Some(1)),
        employee(4, "Emily", "Brown", "emily.brown@company.com", date!(2021-09-05), 1, "Software Engineer", Some(1)),
        employee(5, "David", "Jones", "david.jones@company.com", date!(2022-02-14), 1, "Junior Software Engineer", Some(2)),
        // Sales
        employee(6, "Jennifer", "Garcia", "jennifer.garcia@company.com", date!(2019-11-01), 2, "Sales Director", None),
        employee(7, "Robert", "Miller", "robert.miller@company.com", date!(2020-05-18), 2, "Senior Sales Rep", Some(6)),
        employee(8, "Lisa", "Davis", "lisa.davis@company.com", date!(2021-01-22), 2, "Sales Rep", Some(6)),
        employee(9, "James", "Rodriguez", "james.rodriguez@company.com", date!(2021-08-30), 2, "Sales Rep", Some(6)),
        // Marketing
        employee(10, "Maria", "Martinez", "maria.martinez@company.com", date!(2020-07-12), 3, "Marketing Manager", None),
        employee(11, "Christopher", "Hernandez", "chris.hernandez@company.com", date!(2021-03-08), 3, "Marketing Specialist", Some(10)),
        employee(12, "Amanda", "Lopez", "amanda.lopez@company.com", date!(2022-01-17), 3, "Social Media Manager", Some(10)),
        // Human Resources
        employee(13, "Daniel", "Gonzalez", "daniel.gonzalez@company.com", date!(2019-08-20), 4, "HR Director", None),
        employee(14, "Jessica", "Wilson", "jessica.wilson@company.com", date!(2020-10-05), 4, "HR Specialist", Some(13)),
        // Finance
        employee(15, "Matthew", "Anderson", "matthew.anderson@company.com", date!(2019-12-10), 5, "Finance Director", None),
        employee(16, "Ashley", "Thomas", "ashley.thomas@company.com", date!(2020-09-14), 5, "Financial Analyst", Some(15)),
        employee(17, "Joshua", "Taylor", "joshua.taylor@company.com", date!(2021-11-29), 5, "Accountant", Some(15)),
        // Customer Support
        employee(18, "Nicole", "Moore", "nicole.moore@company.com", date!(2020-04-23), 6, "Support Manager", None),
        employee(19, "Andrew", "Jackson", "andrew.jackson@company.com", date!(2021-07-19), 6, "Support Specialist", Some(18)),
        employee(20, "Stephanie", "Martin", "stephanie.martin@company.com", date!(2022-03-11), 6, "Support Specialist", Some(18)),
    ]
}

/// Starting salaries, effective on each employee's hire date.
pub(crate) fn salaries() -> Vec<Salary> {
    vec![
        salary(1, 1, 145_000.0, date!(2020-01-15)),
        salary(2, 2, 125_000.0, date!(2020-03-20)),
        salary(3, 3, 95_000.0, date!(2021-06-10)),
        salary(4, 4, 92_000.0, date!(2021-09-05)),
        salary(5, 5, 75_000.0, date!(2022-02-14)),
        salary(6, 6, 135_000.0, date!(2019-11-01)),
        salary(7, 7, 95_000.0, date!(2020-05-18)),
        salary(8, 8, 72_000.0, date!(2021-01-22)),
        salary(9, 9, 70_000.0, date!(2021-08-30)),
        salary(10, 10, 105_000.0, date!(2020-07-12)),
        salary(11, 11, 68_000.0, date!(2021-03-08)),
        salary(12, 12, 65_000.0, date!(2022-01-17)),
        salary(13, 13, 115_000.0, date!(2019-08-20)),
        salary(14, 14, 62_000.0, date!(2020-10-05)),
        salary(15, 15, 140_000.0, date!(2019-12-10)),
        salary(16, 16, 78_000.0, date!(2020-09-14)),
        salary(17, 17, 68_000.0, date!(2021-11-29)),
        salary(18, 18, 85_000.0, date!(2020-04-23)),
        salary(19, 19, 52_000.0, date!(2021-07-19)),
        salary(20, 20, 50_000.0, date!(2022-03-11)),
    ]
}

#[rustfmt::skip]
pub(crate) fn projects() -> Vec<Project> {
    vec![
        project(1, "Cloud Migration", 1, date!(2023-01-01), date!(2023-12-31), 500_000.0),
        project(2, "Mobile App Development", 1, date!(2023-03-15), date!(2024-03-15), 350_000.0),
        project(3, "Q4 Sales Campaign", 2, date!(2023-10-01), date!(2023-12-31), 150_000.0),
        project(4, "Brand Refresh", 3, date!(2023-06-01), date!(2024-01-31), 200_000.0),
        project(5, "Employee Wellness Program", 4, date!(2023-01-01), date!(2023-12-31), 75_000.0),
        project(6, "Financial Systems Upgrade", 5, date!(2023-04-01), date!(2023-10-31), 180_000.0),
        project(7, "Customer Portal Redesign", 6, date!(2023-05-01), date!(2023-11-30), 120_000.0),
    ]
}

pub(crate) fn assignments() -> Vec<EmployeeProject> {
    vec![
        // Cloud Migration
        assignment(1, 1, "Project Lead", 160),
        assignment(2, 1, "Senior Developer", 200),
        assignment(3, 1, "Developer", 200),
        // Mobile App Development
        assignment(2, 2, "Tech Lead", 180),
        assignment(4, 2, "Developer", 200),
        assignment(5, 2, "Junior Developer", 200),
        // Q4 Sales Campaign
        assignment(6, 3, "Campaign Director", 120),
        assignment(7, 3, "Sales Lead", 160),
        assignment(8, 3, "Sales Support", 160),
        // Brand Refresh
        assignment(10, 4, "Project Manager", 140),
        assignment(11, 4, "Marketing Specialist", 180),
        assignment(12, 4, "Social Media Lead", 160),
        // Employee Wellness Program
        assignment(13, 5, "Program Director", 100),
        assignment(14, 5, "HR Coordinator", 150),
        // Financial Systems Upgrade
        assignment(15, 6, "Finance Lead", 120),
        assignment(16, 6, "Systems Analyst", 180),
        assignment(17, 6, "Accountant", 160),
        // Customer Portal Redesign
        assignment(18, 7, "Product Owner", 140),
        assignment(19, 7, "Support Specialist", 120),
        assignment(3, 7, "Developer", 100),
    ]
}

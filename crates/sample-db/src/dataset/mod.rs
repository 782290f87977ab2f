//! The literal sample dataset and advisory checks over it.
//!
//! [`SampleDataset::standard`] returns the rows written by the `seed` binary.
//! [`SampleDataset::validate`] inspects a dataset for domain issues the schema
//! does not enforce; the seeder reports them but never rejects rows.

mod standard;

use std::collections::{HashMap, HashSet};
use std::fmt;

use time::Date;

use crate::models::{Department, Employee, EmployeeProject, Project, Salary};

/// Rows for every table, in the order they are seeded.
#[derive(Debug, Clone, Default)]
pub struct SampleDataset {
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub salaries: Vec<Salary>,
    pub projects: Vec<Project>,
    pub assignments: Vec<EmployeeProject>,
}

/// A domain problem found by [`SampleDataset::validate`].
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetIssue {
    ProjectEndsBeforeStart {
        project_id: i64,
        start_date: Date,
        end_date: Date,
    },
    /// Two salary records for one employee share an effective date.
    OverlappingSalary {
        employee_id: i64,
        effective_date: Date,
    },
    DuplicateEmail {
        email: String,
    },
    DuplicateAssignment {
        employee_id: i64,
        project_id: i64,
    },
    UnknownDepartment {
        table: &'static str,
        row_id: i64,
        department_id: i64,
    },
    UnknownEmployee {
        table: &'static str,
        row_id: i64,
        employee_id: i64,
    },
    UnknownProject {
        employee_id: i64,
        project_id: i64,
    },
    ManagementCycle {
        employee_id: i64,
    },
}

impl fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectEndsBeforeStart {
                project_id,
                start_date,
                end_date,
            } => write!(
                f,
                "project {project_id} ends on {end_date} before it starts on {start_date}"
            ),
            Self::OverlappingSalary {
                employee_id,
                effective_date,
            } => write!(
                f,
                "employee {employee_id} has several salaries effective on {effective_date}"
            ),
            Self::DuplicateEmail { email } => write!(f, "email {email} is used more than once"),
            Self::DuplicateAssignment {
                employee_id,
                project_id,
            } => write!(
                f,
                "employee {employee_id} is assigned to project {project_id} more than once"
            ),
            Self::UnknownDepartment {
                table,
                row_id,
                department_id,
            } => write!(
                f,
                "{table} row {row_id} references missing department {department_id}"
            ),
            Self::UnknownEmployee {
                table,
                row_id,
                employee_id,
            } => write!(
                f,
                "{table} row {row_id} references missing employee {employee_id}"
            ),
            Self::UnknownProject {
                employee_id,
                project_id,
            } => write!(
                f,
                "assignment of employee {employee_id} references missing project {project_id}"
            ),
            Self::ManagementCycle { employee_id } => {
                write!(f, "employee {employee_id} is part of a management cycle")
            }
        }
    }
}

/// Where a walk up the reporting chain stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainEnd {
    Root(usize),
    /// A manager id on the chain has no employee row.
    Dangling,
    /// The chain returns to the starting employee.
    Cycle,
    /// The chain enters a cycle the starting employee is not part of.
    IntoCycle,
}

impl SampleDataset {
    /// The fixed sample organization.
    pub fn standard() -> Self {
        Self {
            departments: standard::departments(),
            employees: standard::employees(),
            salaries: standard::salaries(),
            projects: standard::projects(),
            assignments: standard::assignments(),
        }
    }

    pub fn total_budget(&self) -> f64 {
        self.projects.iter().map(|p| p.budget).sum()
    }

    /// Number of manager hops from `employee_id` up to an employee without a
    /// manager. Returns `None` for unknown employees, dangling managers, and cycles.
    pub fn management_depth(&self, employee_id: i64) -> Option<usize> {
        match self.walk_management_chain(employee_id) {
            ChainEnd::Root(hops) => Some(hops),
            ChainEnd::Dangling | ChainEnd::Cycle | ChainEnd::IntoCycle => None,
        }
    }

    fn walk_management_chain(&self, employee_id: i64) -> ChainEnd {
        let managers: HashMap<i64, Option<i64>> = self
            .employees
            .iter()
            .map(|e| (e.employee_id, e.manager_id))
            .collect();

        let mut current = employee_id;
        let mut seen = HashSet::new();
        let mut hops = 0;

        loop {
            if !seen.insert(current) {
                return if current == employee_id {
                    ChainEnd::Cycle
                } else {
                    ChainEnd::IntoCycle
                };
            }
            match managers.get(&current) {
                None => return ChainEnd::Dangling,
                Some(None) => return ChainEnd::Root(hops),
                Some(Some(manager_id)) => {
                    current = *manager_id;
                    hops += 1;
                }
            }
        }
    }

    /// Collects every domain issue in the dataset. An empty result means the
    /// rows are consistent with each other.
    pub fn validate(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        let department_ids: HashSet<i64> =
            self.departments.iter().map(|d| d.department_id).collect();
        let employee_ids: HashSet<i64> = self.employees.iter().map(|e| e.employee_id).collect();
        let project_ids: HashSet<i64> = self.projects.iter().map(|p| p.project_id).collect();

        let mut emails = HashSet::new();
        for employee in &self.employees {
            if !emails.insert(employee.email.as_str()) {
                issues.push(DatasetIssue::DuplicateEmail {
                    email: employee.email.clone(),
                });
            }
            if let Some(department_id) = employee.department_id {
                if !department_ids.contains(&department_id) {
                    issues.push(DatasetIssue::UnknownDepartment {
                        table: "employees",
                        row_id: employee.employee_id,
                        department_id,
                    });
                }
            }
            match employee.manager_id {
                Some(manager_id) if !employee_ids.contains(&manager_id) => {
                    issues.push(DatasetIssue::UnknownEmployee {
                        table: "employees",
                        row_id: employee.employee_id,
                        employee_id: manager_id,
                    });
                }
                Some(_)
                    if self.walk_management_chain(employee.employee_id) == ChainEnd::Cycle =>
                {
                    issues.push(DatasetIssue::ManagementCycle {
                        employee_id: employee.employee_id,
                    });
                }
                _ => {}
            }
        }

        let mut salary_dates = HashSet::new();
        for salary in &self.salaries {
            if !employee_ids.contains(&salary.employee_id) {
                issues.push(DatasetIssue::UnknownEmployee {
                    table: "salaries",
                    row_id: salary.salary_id,
                    employee_id: salary.employee_id,
                });
            }
            if !salary_dates.insert((salary.employee_id, salary.effective_date)) {
                issues.push(DatasetIssue::OverlappingSalary {
                    employee_id: salary.employee_id,
                    effective_date: salary.effective_date,
                });
            }
        }

        for project in &self.projects {
            if project.end_date < project.start_date {
                issues.push(DatasetIssue::ProjectEndsBeforeStart {
                    project_id: project.project_id,
                    start_date: project.start_date,
                    end_date: project.end_date,
                });
            }
            if let Some(department_id) = project.department_id {
                if !department_ids.contains(&department_id) {
                    issues.push(DatasetIssue::UnknownDepartment {
                        table: "projects",
                        row_id: project.project_id,
                        department_id,
                    });
                }
            }
        }

        let mut pairs = HashSet::new();
        for assignment in &self.assignments {
            let pair = (assignment.employee_id, assignment.project_id);
            if !pairs.insert(pair) {
                issues.push(DatasetIssue::DuplicateAssignment {
                    employee_id: pair.0,
                    project_id: pair.1,
                });
            }
            if !employee_ids.contains(&assignment.employee_id) {
                issues.push(DatasetIssue::UnknownEmployee {
                    table: "employee_projects",
                    row_id: assignment.project_id,
                    employee_id: assignment.employee_id,
                });
            }
            if !project_ids.contains(&assignment.project_id) {
                issues.push(DatasetIssue::UnknownProject {
                    employee_id: assignment.employee_id,
                    project_id: assignment.project_id,
                });
            }
        }

        issues
    }
}

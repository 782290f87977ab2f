//! Database seeding utilities.

use std::fmt;
use std::io;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info, warn};

use super::error::SeedError;
use super::schema::{self, Table};
use crate::config::{SeedConfig, StoreLocation};
use crate::dataset::SampleDataset;
use crate::models::{Department, Employee, EmployeeProject, Project, Salary};

/// Row counts reported after a seed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSummary {
    pub location: String,
    pub departments: i64,
    pub employees: i64,
    pub salaries: i64,
    pub projects: i64,
    pub employee_projects: i64,
}

impl fmt::Display for SeedSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Database Summary:")?;
        writeln!(f, "- {} departments", self.departments)?;
        writeln!(f, "- {} employees", self.employees)?;
        writeln!(f, "- {} projects", self.projects)?;
        writeln!(f, "- {} salary records", self.salaries)?;
        writeln!(f, "- {} project assignments", self.employee_projects)?;
        write!(f, "- Location: {}", self.location)
    }
}

/// Database seeder writing the sample tables with replace-on-conflict semantics.
///
/// Every `upsert_*` method runs in its own transaction and commits once all
/// of its rows are written, so a failure leaves earlier tables in place.
pub struct Seeder {
    pool: SqlitePool,
    location: String,
    batch_size: usize,
}

impl Seeder {
    /// Creates a new seeder over an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            location: "<external pool>".to_string(),
            batch_size: 50,
        }
    }

    /// Sets how many rows are written between progress log lines.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Opens the configured store, creating the database file if absent.
    ///
    /// The containing directory must already exist.
    pub async fn open_or_create(config: &SeedConfig) -> Result<Self, SeedError> {
        let location = config.location.to_string();
        let unavailable = |source| SeedError::StorageUnavailable {
            location: location.clone(),
            source,
        };

        let options = match &config.location {
            StoreLocation::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() && !parent.is_dir() {
                        return Err(unavailable(sqlx::Error::Io(io::Error::new(
                            io::ErrorKind::NotFound,
                            format!("directory {} does not exist", parent.display()),
                        ))));
                    }
                }
                SqliteConnectOptions::new()
                    .filename(path)
                    .create_if_missing(true)
            }
            StoreLocation::InMemory => SqliteConnectOptions::new().in_memory(true),
        }
        .foreign_keys(config.enforce_foreign_keys);

        // One connection: single writer, and an in-memory store lives as long as it does.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
            .map_err(unavailable)?;

        info!("Connected to database at {}", location);

        Ok(Self {
            pool,
            location,
            batch_size: config.batch_size.max(1),
        })
    }

    /// Creates any missing tables.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        let existing = schema::existing_tables(&self.pool).await?;
        if !existing.is_empty() {
            debug!("Found existing tables: {}", existing.join(", "));
        }

        schema::ensure_schema(&self.pool).await?;
        Ok(())
    }

    /// Seeds the whole dataset in dependency order and returns the final counts.
    pub async fn seed(&self, dataset: &SampleDataset) -> Result<SeedSummary, SeedError> {
        self.ensure_schema().await?;

        for issue in dataset.validate() {
            warn!("Dataset issue: {}", issue);
        }

        info!("Inserting sample data...");
        self.upsert_departments(&dataset.departments).await?;
        self.upsert_employees(&dataset.employees).await?;
        self.upsert_salaries(&dataset.salaries).await?;
        self.upsert_projects(&dataset.projects).await?;
        self.upsert_employee_projects(&dataset.assignments).await?;
        info!("Database created successfully");

        self.summarize().await
    }

    /// Inserts or replaces departments by `department_id`.
    pub async fn upsert_departments(&self, departments: &[Department]) -> Result<(), SeedError> {
        let table = Table::Departments;
        let mut tx = self.pool.begin().await?;

        for (i, chunk) in departments.chunks(self.batch_size).enumerate() {
            for department in chunk {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO departments (department_id, department_name, location)
                    VALUES (?, ?, ?)
                    "#,
                )
                .bind(department.department_id)
                .bind(&department.department_name)
                .bind(&department.location)
                .execute(&mut *tx)
                .await
                .map_err(|e| SeedError::from_upsert(table, e))?;
            }
            self.report_progress(table, i, chunk.len(), departments.len());
        }

        tx.commit().await?;
        info!("Inserted {} departments", departments.len());
        Ok(())
    }

    /// Inserts or replaces employees by `employee_id`.
    ///
    /// Managers must precede their reports when foreign keys are enforced.
    pub async fn upsert_employees(&self, employees: &[Employee]) -> Result<(), SeedError> {
        let table = Table::Employees;
        let mut tx = self.pool.begin().await?;

        for (i, chunk) in employees.chunks(self.batch_size).enumerate() {
            for employee in chunk {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO employees (
                        employee_id, first_name, last_name, email,
                        hire_date, department_id, job_title, manager_id
                    )
                    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(employee.employee_id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .bind(employee.hire_date)
                .bind(employee.department_id)
                .bind(&employee.job_title)
                .bind(employee.manager_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| SeedError::from_upsert(table, e))?;
            }
            self.report_progress(table, i, chunk.len(), employees.len());
        }

        tx.commit().await?;
        info!("Inserted {} employees", employees.len());
        Ok(())
    }

    /// Inserts or replaces salary records by `salary_id`.
    pub async fn upsert_salaries(&self, salaries: &[Salary]) -> Result<(), SeedError> {
        let table = Table::Salaries;
        let mut tx = self.pool.begin().await?;

        for (i, chunk) in salaries.chunks(self.batch_size).enumerate() {
            for salary in chunk {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO salaries (salary_id, employee_id, salary, effective_date)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(salary.salary_id)
                .bind(salary.employee_id)
                .bind(salary.salary)
                .bind(salary.effective_date)
                .execute(&mut *tx)
                .await
                .map_err(|e| SeedError::from_upsert(table, e))?;
            }
            self.report_progress(table, i, chunk.len(), salaries.len());
        }

        tx.commit().await?;
        info!("Inserted {} salary records", salaries.len());
        Ok(())
    }

    /// Inserts or replaces projects by `project_id`.
    pub async fn upsert_projects(&self, projects: &[Project]) -> Result<(), SeedError> {
        let table = Table::Projects;
        let mut tx = self.pool.begin().await?;

        for (i, chunk) in projects.chunks(self.batch_size).enumerate() {
            for project in chunk {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO projects (
                        project_id, project_name, department_id,
                        start_date, end_date, budget
                    )
                    VALUES (?, ?, ?, ?, ?, ?)
                    "#,
                )
                .bind(project.project_id)
                .bind(&project.project_name)
                .bind(project.department_id)
                .bind(project.start_date)
                .bind(project.end_date)
                .bind(project.budget)
                .execute(&mut *tx)
                .await
                .map_err(|e| SeedError::from_upsert(table, e))?;
            }
            self.report_progress(table, i, chunk.len(), projects.len());
        }

        tx.commit().await?;
        info!("Inserted {} projects", projects.len());
        Ok(())
    }

    /// Inserts or replaces assignments by (`employee_id`, `project_id`).
    pub async fn upsert_employee_projects(
        &self,
        assignments: &[EmployeeProject],
    ) -> Result<(), SeedError> {
        let table = Table::EmployeeProjects;
        let mut tx = self.pool.begin().await?;

        for (i, chunk) in assignments.chunks(self.batch_size).enumerate() {
            for assignment in chunk {
                sqlx::query(
                    r#"
                    INSERT OR REPLACE INTO employee_projects (employee_id, project_id, role, hours_allocated)
                    VALUES (?, ?, ?, ?)
                    "#,
                )
                .bind(assignment.employee_id)
                .bind(assignment.project_id)
                .bind(&assignment.role)
                .bind(assignment.hours_allocated)
                .execute(&mut *tx)
                .await
                .map_err(|e| SeedError::from_upsert(table, e))?;
            }
            self.report_progress(table, i, chunk.len(), assignments.len());
        }

        tx.commit().await?;
        info!("Inserted {} project assignments", assignments.len());
        Ok(())
    }

    /// Counts the rows of every sample table.
    pub async fn summarize(&self) -> Result<SeedSummary, SeedError> {
        Ok(SeedSummary {
            location: self.location.clone(),
            departments: self.count(Table::Departments).await?,
            employees: self.count(Table::Employees).await?,
            salaries: self.count(Table::Salaries).await?,
            projects: self.count(Table::Projects).await?,
            employee_projects: self.count(Table::EmployeeProjects).await?,
        })
    }

    /// Returns the number of rows in `table`.
    pub async fn count(&self, table: Table) -> Result<i64, SeedError> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table.as_str()))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Closes the pool, waiting for the connection to be released.
    pub async fn close(self) {
        self.pool.close().await;
        debug!("Closed database at {}", self.location);
    }

    /// Returns a reference to the pool for advanced usage.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn report_progress(&self, table: Table, chunk_index: usize, chunk_len: usize, total: usize) {
        let done = chunk_index * self.batch_size + chunk_len;
        if done < total {
            debug!("  Inserted {}/{} {}", done, total, table);
        }
    }
}

/// Opens the configured store, seeds the standard dataset, and closes the
/// store again whether or not seeding succeeded.
pub async fn seed_database(config: &SeedConfig) -> Result<SeedSummary, SeedError> {
    let seeder = Seeder::open_or_create(config).await?;
    let result = seeder.seed(&SampleDataset::standard()).await;
    seeder.close().await;
    result
}

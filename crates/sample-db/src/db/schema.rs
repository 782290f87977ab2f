//! Table definitions for the sample database.

use sqlx::SqlitePool;
use tracing::{debug, info};

/// The five sample tables, listed in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Departments,
    Employees,
    Salaries,
    Projects,
    EmployeeProjects,
}

impl Table {
    pub const ALL: [Table; 5] = [
        Table::Departments,
        Table::Employees,
        Table::Salaries,
        Table::Projects,
        Table::EmployeeProjects,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Departments => "departments",
            Table::Employees => "employees",
            Table::Salaries => "salaries",
            Table::Projects => "projects",
            Table::EmployeeProjects => "employee_projects",
        }
    }

    /// `CREATE TABLE IF NOT EXISTS` statement for this table.
    pub fn ddl(&self) -> &'static str {
        match self {
            Table::Departments => DEPARTMENTS_DDL,
            Table::Employees => EMPLOYEES_DDL,
            Table::Salaries => SALARIES_DDL,
            Table::Projects => PROJECTS_DDL,
            Table::EmployeeProjects => EMPLOYEE_PROJECTS_DDL,
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const DEPARTMENTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS departments (
    department_id INTEGER PRIMARY KEY,
    department_name TEXT NOT NULL,
    location TEXT
)
"#;

const EMPLOYEES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS employees (
    employee_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT UNIQUE,
    hire_date DATE,
    department_id INTEGER,
    job_title TEXT,
    manager_id INTEGER,
    FOREIGN KEY (department_id) REFERENCES departments(department_id),
    FOREIGN KEY (manager_id) REFERENCES employees(employee_id)
)
"#;

const SALARIES_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS salaries (
    salary_id INTEGER PRIMARY KEY,
    employee_id INTEGER,
    salary REAL,
    effective_date DATE,
    FOREIGN KEY (employee_id) REFERENCES employees(employee_id)
)
"#;

const PROJECTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    project_id INTEGER PRIMARY KEY,
    project_name TEXT NOT NULL,
    department_id INTEGER,
    start_date DATE,
    end_date DATE,
    budget REAL,
    FOREIGN KEY (department_id) REFERENCES departments(department_id)
)
"#;

const EMPLOYEE_PROJECTS_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS employee_projects (
    employee_id INTEGER,
    project_id INTEGER,
    role TEXT,
    hours_allocated INTEGER,
    PRIMARY KEY (employee_id, project_id),
    FOREIGN KEY (employee_id) REFERENCES employees(employee_id),
    FOREIGN KEY (project_id) REFERENCES projects(project_id)
)
"#;

/// Creates every missing table. Existing tables are left untouched, whatever their shape.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Creating tables...");

    for table in Table::ALL {
        sqlx::query(table.ddl()).execute(pool).await?;
        debug!("Ensured table {}", table);
    }

    info!("Tables created");
    Ok(())
}

/// Returns the names of the sample tables present in the store.
pub async fn existing_tables(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
    let names: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
    )
    .fetch_all(pool)
    .await?;

    Ok(names
        .into_iter()
        .filter(|name| Table::ALL.iter().any(|t| t.as_str() == name.as_str()))
        .collect())
}

//! Integration tests for seeding the sample database.
//!
//! These run against in-memory SQLite stores or files in temporary
//! directories, so they need no external setup:
//!
//! `cargo test -p sample-db --test seed_integration`

use std::collections::HashMap;

use sample_db::prelude::*;
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Opens a fresh in-memory store with foreign keys enforced.
async fn memory_seeder() -> Seeder {
    Seeder::open_or_create(&SeedConfig::in_memory().with_foreign_keys(true))
        .await
        .expect("Failed to open in-memory store")
}

async fn seeded_memory_seeder() -> Seeder {
    let seeder = memory_seeder().await;
    seeder
        .seed(&SampleDataset::standard())
        .await
        .expect("Seeding should succeed");
    seeder
}

async fn all_employees(pool: &SqlitePool) -> Vec<Employee> {
    sqlx::query_as("SELECT * FROM employees ORDER BY employee_id")
        .fetch_all(pool)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_fresh_run_counts() {
    let seeder = seeded_memory_seeder().await;
    let summary = seeder.summarize().await.unwrap();

    assert_eq!(summary.departments, 6);
    assert_eq!(summary.employees, 20);
    assert_eq!(summary.salaries, 20);
    assert_eq!(summary.projects, 7);
    assert_eq!(summary.employee_projects, 20);
    assert_eq!(summary.location, ":memory:");

    seeder.close().await;
}

#[tokio::test]
async fn test_engineering_department() {
    let seeder = seeded_memory_seeder().await;

    let department: Department =
        sqlx::query_as("SELECT * FROM departments WHERE department_id = 1")
            .fetch_one(seeder.pool())
            .await
            .unwrap();

    assert_eq!(department.department_name, "Engineering");
    assert_eq!(department.location.as_deref(), Some("San Francisco"));
}

#[tokio::test]
async fn test_total_budget() {
    let seeder = seeded_memory_seeder().await;

    let total: f64 = sqlx::query_scalar("SELECT SUM(budget) FROM projects")
        .fetch_one(seeder.pool())
        .await
        .unwrap();

    assert_eq!(total, 1_575_000.0);
}

#[tokio::test]
async fn test_rows_round_trip() {
    let seeder = seeded_memory_seeder().await;
    let dataset = SampleDataset::standard();

    assert_eq!(all_employees(seeder.pool()).await, dataset.employees);

    let projects: Vec<Project> = sqlx::query_as("SELECT * FROM projects ORDER BY project_id")
        .fetch_all(seeder.pool())
        .await
        .unwrap();
    assert_eq!(projects, dataset.projects);
}

#[tokio::test]
async fn test_seeding_twice_is_idempotent() {
    let seeder = seeded_memory_seeder().await;
    let first_summary = seeder.summarize().await.unwrap();
    let first_employees = all_employees(seeder.pool()).await;
    let first_assignments: Vec<EmployeeProject> =
        sqlx::query_as("SELECT * FROM employee_projects ORDER BY employee_id, project_id")
            .fetch_all(seeder.pool())
            .await
            .unwrap();

    let second_summary = seeder.seed(&SampleDataset::standard()).await.unwrap();
    let second_assignments: Vec<EmployeeProject> =
        sqlx::query_as("SELECT * FROM employee_projects ORDER BY employee_id, project_id")
            .fetch_all(seeder.pool())
            .await
            .unwrap();

    assert_eq!(first_summary, second_summary);
    assert_eq!(first_employees, all_employees(seeder.pool()).await);
    assert_eq!(first_assignments, second_assignments);
}

#[tokio::test]
async fn test_referential_completeness() {
    let seeder = seeded_memory_seeder().await;
    let pool = seeder.pool();

    let orphan_queries = [
        "SELECT COUNT(*) FROM employees e LEFT JOIN departments d ON e.department_id = d.department_id \
         WHERE e.department_id IS NOT NULL AND d.department_id IS NULL",
        "SELECT COUNT(*) FROM projects p LEFT JOIN departments d ON p.department_id = d.department_id \
         WHERE p.department_id IS NOT NULL AND d.department_id IS NULL",
        "SELECT COUNT(*) FROM employees e LEFT JOIN employees m ON e.manager_id = m.employee_id \
         WHERE e.manager_id IS NOT NULL AND m.employee_id IS NULL",
        "SELECT COUNT(*) FROM employee_projects ep LEFT JOIN employees e ON ep.employee_id = e.employee_id \
         WHERE e.employee_id IS NULL",
        "SELECT COUNT(*) FROM employee_projects ep LEFT JOIN projects p ON ep.project_id = p.project_id \
         WHERE p.project_id IS NULL",
        "SELECT COUNT(*) FROM salaries s LEFT JOIN employees e ON s.employee_id = e.employee_id \
         WHERE e.employee_id IS NULL",
    ];

    for sql in orphan_queries {
        let orphans: i64 = sqlx::query_scalar(sql).fetch_one(pool).await.unwrap();
        assert_eq!(orphans, 0, "orphaned rows found by: {sql}");
    }
}

#[tokio::test]
async fn test_uniqueness() {
    let seeder = seeded_memory_seeder().await;
    let pool = seeder.pool();

    let duplicate_emails: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM (SELECT email FROM employees GROUP BY email HAVING COUNT(*) > 1)",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    assert_eq!(duplicate_emails, 0);

    let duplicate_pairs: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM (SELECT employee_id, project_id FROM employee_projects \
         GROUP BY employee_id, project_id HAVING COUNT(*) > 1)",
    )
    .fetch_one(pool)
    .await
    .unwrap();
    assert_eq!(duplicate_pairs, 0);
}

#[tokio::test]
async fn test_manager_chains_terminate() {
    let seeder = seeded_memory_seeder().await;
    let employees = all_employees(seeder.pool()).await;
    let managers: HashMap<i64, Option<i64>> = employees
        .iter()
        .map(|e| (e.employee_id, e.manager_id))
        .collect();

    for employee in &employees {
        let mut current = employee.manager_id;
        let mut hops = 0;
        while let Some(manager_id) = current {
            hops += 1;
            assert!(hops <= 3, "{} has a chain longer than 3", employee.full_name());
            current = managers[&manager_id];
        }
    }
}

#[tokio::test]
async fn test_replace_overwrites_existing_row() {
    let seeder = seeded_memory_seeder().await;

    seeder
        .upsert_departments(&[Department {
            department_id: 1,
            department_name: "Platform".to_string(),
            location: None,
        }])
        .await
        .unwrap();

    let department: Department =
        sqlx::query_as("SELECT * FROM departments WHERE department_id = 1")
            .fetch_one(seeder.pool())
            .await
            .unwrap();
    assert_eq!(department.department_name, "Platform");
    assert_eq!(department.location, None);
    assert_eq!(seeder.count(Table::Departments).await.unwrap(), 6);
    assert_eq!(seeder.count(Table::Employees).await.unwrap(), 20);
}

#[tokio::test]
async fn test_out_of_order_insert_violates_foreign_keys() {
    let seeder = memory_seeder().await;
    seeder.ensure_schema().await.unwrap();

    let err = seeder
        .upsert_employees(&SampleDataset::standard().employees)
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            SeedError::ConstraintViolation {
                table: Table::Employees,
                ..
            }
        ),
        "unexpected error: {err}"
    );
    assert_eq!(seeder.count(Table::Employees).await.unwrap(), 0);
}

#[tokio::test]
async fn test_out_of_order_insert_allowed_without_foreign_keys() {
    let config = SeedConfig::in_memory().with_foreign_keys(false);
    let seeder = Seeder::open_or_create(&config).await.unwrap();
    seeder.ensure_schema().await.unwrap();

    seeder
        .upsert_employee_projects(&SampleDataset::standard().assignments)
        .await
        .unwrap();

    assert_eq!(seeder.count(Table::EmployeeProjects).await.unwrap(), 20);
}

#[tokio::test]
async fn test_incompatible_table_fails_insert_and_keeps_prior_phases() {
    let seeder = memory_seeder().await;
    sqlx::query("CREATE TABLE projects (project_id INTEGER PRIMARY KEY, title TEXT)")
        .execute(seeder.pool())
        .await
        .unwrap();

    let err = seeder
        .seed(&SampleDataset::standard())
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            SeedError::InsertFailed {
                table: Table::Projects,
                ..
            }
        ),
        "unexpected error: {err}"
    );
    assert_eq!(err.table(), Some(Table::Projects));
    assert_eq!(seeder.count(Table::Departments).await.unwrap(), 6);
    assert_eq!(seeder.count(Table::Employees).await.unwrap(), 20);
    assert_eq!(seeder.count(Table::Salaries).await.unwrap(), 20);
    assert_eq!(seeder.count(Table::Projects).await.unwrap(), 0);
}

#[tokio::test]
async fn test_stricter_existing_table_reports_constraint_violation() {
    let seeder = memory_seeder().await;
    sqlx::query(
        "CREATE TABLE departments (department_id INTEGER PRIMARY KEY, \
         department_name TEXT NOT NULL, location TEXT CHECK (location = 'Remote'))",
    )
    .execute(seeder.pool())
    .await
    .unwrap();

    let err = seeder
        .seed(&SampleDataset::standard())
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            SeedError::ConstraintViolation {
                table: Table::Departments,
                ..
            }
        ),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_seed_database_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("employees.db");
    let config = SeedConfig::default().with_path(&path);

    let summary = seed_database(&config).await.unwrap();
    assert!(path.exists());
    assert_eq!(summary.employees, 20);
    assert!(summary.to_string().contains("- 6 departments"));

    // Re-running against the same file converges to the same contents.
    let rerun = seed_database(&config).await.unwrap();
    assert_eq!(summary, rerun);
}

#[tokio::test]
async fn test_foreign_keys_off_by_default() {
    let seeder = Seeder::open_or_create(&SeedConfig::in_memory())
        .await
        .unwrap();

    let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
        .fetch_one(seeder.pool())
        .await
        .unwrap();
    assert_eq!(enabled, 0);

    seeder.ensure_schema().await.unwrap();
    seeder
        .upsert_employees(&SampleDataset::standard().employees)
        .await
        .unwrap();
    assert_eq!(seeder.count(Table::Employees).await.unwrap(), 20);
}

#[tokio::test]
async fn test_directory_as_store_path_is_storage_unavailable() {
    let dir = TempDir::new().unwrap();
    let config = SeedConfig::default().with_path(dir.path());

    let err = seed_database(&config).await.unwrap_err();

    assert!(
        matches!(err, SeedError::StorageUnavailable { .. }),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn test_missing_directory_is_storage_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("employees.db");
    let config = SeedConfig::default().with_path(&path);

    let err = seed_database(&config).await.unwrap_err();

    assert!(
        matches!(err, SeedError::StorageUnavailable { .. }),
        "unexpected error: {err}"
    );
    assert!(!path.exists());
}

#[tokio::test]
async fn test_seeder_over_external_pool() {
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let seeder = Seeder::new(pool).with_batch_size(3);

    let summary = seeder.seed(&SampleDataset::standard()).await.unwrap();

    assert_eq!(summary.location, "<external pool>");
    assert_eq!(summary.projects, 7);
    assert_eq!(summary.employee_projects, 20);
}

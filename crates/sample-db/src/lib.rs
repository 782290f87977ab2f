//! Sample employees database for exercising SQL query tooling.
//!
//! This crate creates a small SQLite database with departments, employees,
//! salary history, projects, and project assignments, using a fixed dataset
//! so downstream tests can rely on exact contents.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use sample_db::prelude::*;
//!
//! let config = SeedConfig::default().with_path("db/employees.db");
//! let summary = seed_database(&config).await?;
//! println!("{summary}");
//! ```

pub mod config;
pub mod dataset;
pub mod db;
pub mod models;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{SeedConfig, StoreLocation};
    pub use crate::dataset::{DatasetIssue, SampleDataset};
    pub use crate::db::{SeedError, SeedSummary, Seeder, Table, seed_database};
    pub use crate::models::{Department, Employee, EmployeeProject, Project, Salary};
}

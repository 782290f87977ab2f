//! Database integration for seeding the sample tables.
//!
//! The [`Seeder`] opens the store, creates the schema, and upserts each
//! table of a [`SampleDataset`](crate::dataset::SampleDataset) in dependency order.

mod error;
pub mod schema;
mod seeder;

pub use error::SeedError;
pub use schema::Table;
pub use seeder::{SeedSummary, Seeder, seed_database};

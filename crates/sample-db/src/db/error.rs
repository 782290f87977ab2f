use sqlx::error::ErrorKind;
use thiserror::Error;

use super::schema::Table;

/// SQLite primary result code for `SQLITE_CONSTRAINT`.
const SQLITE_CONSTRAINT: i32 = 19;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Storage unavailable at {location}: {source}")]
    StorageUnavailable {
        location: String,
        #[source]
        source: sqlx::Error,
    },
    #[error("Constraint violation in {table}: {source}")]
    ConstraintViolation {
        table: Table,
        #[source]
        source: sqlx::Error,
    },
    #[error("Insert into {table} failed: {source}")]
    InsertFailed {
        table: Table,
        #[source]
        source: sqlx::Error,
    },
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl SeedError {
    /// Classifies an error raised while upserting rows into `table`.
    pub(crate) fn from_upsert(table: Table, source: sqlx::Error) -> Self {
        if is_constraint_violation(&source) {
            SeedError::ConstraintViolation { table, source }
        } else {
            SeedError::InsertFailed { table, source }
        }
    }

    /// The table being written when the error occurred, if any.
    pub fn table(&self) -> Option<Table> {
        match self {
            SeedError::ConstraintViolation { table, .. } | SeedError::InsertFailed { table, .. } => {
                Some(*table)
            }
            _ => None,
        }
    }
}

fn is_constraint_violation(err: &sqlx::Error) -> bool {
    let Some(db_err) = err.as_database_error() else {
        return false;
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation
        | ErrorKind::ForeignKeyViolation
        | ErrorKind::NotNullViolation
        | ErrorKind::CheckViolation => true,
        // Extended result codes carry the primary code in the low byte.
        _ => db_err
            .code()
            .and_then(|code| code.parse::<i32>().ok())
            .is_some_and(|code| code & 0xff == SQLITE_CONSTRAINT),
    }
}

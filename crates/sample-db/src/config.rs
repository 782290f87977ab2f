//! Configuration types for seeding the sample database.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Location used when nothing else is configured.
pub const DEFAULT_DATABASE_PATH: &str = "db/employees.db";

/// Environment variable overriding the store location.
pub const DATABASE_PATH_ENV: &str = "SAMPLE_DB_PATH";

/// Environment variable toggling foreign-key enforcement (`1`/`true`/`on` enables).
pub const FOREIGN_KEYS_ENV: &str = "SAMPLE_DB_FOREIGN_KEYS";

/// Where the SQLite store lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreLocation {
    /// A database file on disk, created if absent.
    File(PathBuf),
    /// A private in-memory database, discarded when the seeder closes.
    InMemory,
}

impl StoreLocation {
    /// Parses a location string; the literal `:memory:` selects an in-memory store.
    pub fn parse(raw: &str) -> Self {
        if raw == ":memory:" {
            Self::InMemory
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Returns the file path, if this location is file-backed.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            Self::InMemory => None,
        }
    }
}

impl Default for StoreLocation {
    fn default() -> Self {
        Self::File(PathBuf::from(DEFAULT_DATABASE_PATH))
    }
}

impl fmt::Display for StoreLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::InMemory => f.write_str(":memory:"),
        }
    }
}

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Target store.
    pub location: StoreLocation,

    /// Whether SQLite enforces the declared foreign keys on this connection.
    /// Off by default, matching a plain SQLite connection.
    pub enforce_foreign_keys: bool,

    /// Number of rows between progress log lines during an upsert phase.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            location: StoreLocation::default(),
            enforce_foreign_keys: false,
            batch_size: 50,
        }
    }
}

impl SeedConfig {
    /// Reads `SAMPLE_DB_PATH` and `SAMPLE_DB_FOREIGN_KEYS`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(DATABASE_PATH_ENV) {
            if !raw.trim().is_empty() {
                config.location = StoreLocation::parse(raw.trim());
            }
        }

        if let Ok(raw) = std::env::var(FOREIGN_KEYS_ENV) {
            config.enforce_foreign_keys = parse_flag(&raw).unwrap_or(false);
        }

        config
    }

    /// Creates a configuration for an in-memory store.
    pub fn in_memory() -> Self {
        Self {
            location: StoreLocation::InMemory,
            ..Self::default()
        }
    }

    /// Sets a file-backed store location.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.location = StoreLocation::File(path.into());
        self
    }

    /// Enables or disables foreign-key enforcement.
    pub fn with_foreign_keys(mut self, enforce: bool) -> Self {
        self.enforce_foreign_keys = enforce;
        self
    }

    /// Sets the progress reporting interval.
    pub fn with_batch_size(mut self, size: usize) -> Self {
        self.batch_size = size.max(1);
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

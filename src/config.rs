use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::sqlite::NewStudent;

/// Configuration for one run of a SQLite example program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
    /// Row inserted on every run
    pub student: NewStudent,
}

impl ExampleConfig {
    /// Create a new example config with path and row
    pub fn new(db_path: impl Into<PathBuf>, student: NewStudent) -> Self {
        Self {
            db_path: db_path.into(),
            student,
        }
    }

    /// The query example: `test.db`, Bob aged 21.
    pub fn mini_sqlite_query() -> Self {
        Self::new("test.db", NewStudent::new("Bob", 21))
    }

    /// The connection example: `example.db`, Alice aged 22.
    pub fn db_connect() -> Self {
        Self::new("example.db", NewStudent::new("Alice", 22))
    }

    /// Same row, different file. Used to point the examples at scratch files.
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

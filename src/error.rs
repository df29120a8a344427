use thiserror::Error;

/// Errors surfaced by the guide printer and the SQLite examples.
#[derive(Debug, Error)]
pub enum TutorError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TutorError>;

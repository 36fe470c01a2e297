// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad command line
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Table error: {0}")]
    Table(#[from] TableError),
}

/// Why a schedule table could not be assembled at all. Problems confined to
/// one cell are warnings on the schedule instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("missing day header row")]
    MissingHeader,

    #[error("row {row}: expected {expected} cells, found {found}")]
    RowSizeMismatch { row: usize, expected: usize, found: usize },

    #[error("invalid table layout")]
    InvalidLayout,
}

//! Error types for enumgen-db

use thiserror::Error;

/// Result type alias for enumgen-db operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading enum data from a database
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite driver error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] sqlx::Error),

    /// Type conversion error
    #[error("Type conversion error: expected {expected}, got {actual}")]
    TypeConversion {
        expected: &'static str,
        actual: String,
    },

    /// Query execution error
    #[error("Query error: {0}")]
    Query(String),

    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Table or column name that cannot be placed in a projection query
    #[error("Invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

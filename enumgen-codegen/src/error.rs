//! Error types for enumgen-codegen

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for enumgen-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during enum generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Enum config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("Failed to parse enum config {}: {message}", .path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Invalid config entry: {0}")]
    InvalidConfigEntry(String),

    #[error("SQLite database file not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    #[error("Unable to open the SQLite database: {0}")]
    Connection(#[source] enumgen_db::Error),

    #[error("Unable to read database config\n\n{entry}\n{source}")]
    Query {
        entry: String,
        #[source]
        source: enumgen_db::Error,
    },

    #[error("Source folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("Destination folder not found: {}", .0.display())]
    DestinationNotFound(PathBuf),

    #[error("Template file not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Malformed template: {0}")]
    MalformedTemplate(String),

    #[error("Column length mismatch: {names} names but {values} values")]
    ColumnLengthMismatch { names: usize, values: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}

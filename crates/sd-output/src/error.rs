//! Error types for sd-output.

use thiserror::Error;

/// Errors that can occur when reading or writing result files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row does not match the fixed result-file column schema.
    #[error("{source_name}:{line}: schema mismatch: {message}")]
    Schema {
        source_name: String,
        line:        u64,
        message:     String,
    },

    #[error("{source_name}:{line}: invalid manifest entry: {message}")]
    Manifest {
        source_name: String,
        line:        u64,
        message:     String,
    },
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;

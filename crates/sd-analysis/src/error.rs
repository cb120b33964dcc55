//! Error types for sd-analysis.

use thiserror::Error;

use sd_output::OutputError;

/// Errors that can occur while loading or comparing datasets.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A manifest-listed result file could not be loaded.
    #[error("dataset {file}: {source}")]
    Dataset {
        file:   String,
        #[source]
        source: OutputError,
    },
}

/// Alias for `Result<T, AnalysisError>`.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

//! Toolkit base error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `From`, so validation failures raised here keep their message
//! all the way up to the binaries.

use thiserror::Error;

/// The error type for `sd-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    /// A nominal parameter makes the measurement undefined (for example a
    /// zero velocity, which yields a zero expected displacement).
    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// A numeric row does not match the fixed result-file column schema.
    #[error("schema mismatch: {0}")]
    Schema(String),
}

/// Shorthand result type for `sd-core`.
pub type CoreResult<T> = Result<T, CoreError>;

use thiserror::Error;

/// Failures of the remote agent/world capability.
///
/// None of these are retried: any of them aborts the current run.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    /// The simulator could not be reached or a call on it failed.
    #[error("simulator unavailable: {0}")]
    Unavailable(String),

    #[error("entity {0:?} does not exist")]
    UnknownEntity(String),

    #[error("entity {0:?} already exists")]
    AlreadyExists(String),

    #[error("entity {0:?} cannot be driven")]
    NotMobile(String),

    #[error("spawn layout error: {0}")]
    Layout(String),

    /// Populations only ever grow during a sweep.
    #[error("cannot shrink {what} population from {current} to {requested}")]
    Shrink {
        what:      &'static str,
        current:   usize,
        requested: usize,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;

use sd_agent::AgentError;
use sd_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MeasureError {
    /// The simulator could not be reached or rejected a call.  Fatal.
    #[error("agent control failed: {0}")]
    Agent(#[from] AgentError),

    /// Nominal parameters make the measurement undefined.
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("trial run produced {got} rows, expected {expected}")]
    IncompleteTrials {
        expected: usize,
        got:      usize,
    },
}

pub type MeasureResult<T> = Result<T, MeasureError>;

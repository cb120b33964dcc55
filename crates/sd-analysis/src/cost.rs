//! Cost derivation: real seconds spent per simulated second.
//!
//! A result row records the nominal probe (`duration`, `velocity`) and the
//! mean absolute shortfall `a_err = expected − measured`.  The simulator
//! covered `measured` distance at the commanded velocity, so it advanced
//! `measured / velocity` simulated seconds while `duration` real seconds
//! passed:
//!
//! ```text
//! d_exp        = duration · velocity
//! d_meas       = d_exp − a_err
//! t_sim        = d_meas / velocity
//! real_per_sim = duration / t_sim
//! ```
//!
//! A row whose inferred `t_sim` is zero (the agent never moved) has no finite
//! cost.  The value stays in the output as `inf`/`NaN`; [`singularities`]
//! lists such rows.

use sd_core::{ResultMatrix, TrialRecord};

/// Every intermediate of the cost formula for one row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CostBreakdown {
    pub expected_distance: f64,
    pub measured_distance: f64,
    pub sim_secs:          f64,
    pub real_per_sim:      f64,
}

impl CostBreakdown {
    pub fn of(record: &TrialRecord) -> Self {
        let expected_distance = record.duration_secs * record.velocity;
        let measured_distance = expected_distance - record.abs_mean;
        let sim_secs = measured_distance / record.velocity;
        Self {
            expected_distance,
            measured_distance,
            sim_secs,
            real_per_sim: record.duration_secs / sim_secs,
        }
    }
}

/// Real seconds per simulated second, one value per row of `matrix`.
pub fn derive_cost(matrix: &ResultMatrix) -> Vec<f64> {
    matrix
        .records()
        .iter()
        .map(|r| CostBreakdown::of(r).real_per_sim)
        .collect()
}

/// A row whose cost is not a finite number.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Singularity {
    /// Row index within the result matrix.
    pub row:    usize,
    pub agents: u32,
    pub value:  f64,
}

/// Rows of `matrix` whose entry in `costs` is `inf` or `NaN`.
///
/// `costs` must come from [`derive_cost`] on the same matrix.
pub fn singularities(matrix: &ResultMatrix, costs: &[f64]) -> Vec<Singularity> {
    matrix
        .records()
        .iter()
        .zip(costs)
        .enumerate()
        .filter(|(_, (_, c))| !c.is_finite())
        .map(|(row, (r, &value))| Singularity { row, agents: r.agents, value })
        .collect()
}

//! A scenario: one point of a sweep, turned into one result-file row.

use sd_agent::AgentControl;
use sd_core::{Clock, TrialConfig, TrialRecord};

use crate::{MeasureResult, TrialObserver, TrialRunner, TrialSummary};

/// Nominal conditions of one measured row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Primary agents (bees) in the world, focal bee included.
    pub agents:     u32,
    /// Whether distractors face away from the focal bee.
    pub face_south: bool,
    pub config:     TrialConfig,
}

impl Scenario {
    pub fn new(agents: u32, face_south: bool, config: TrialConfig) -> Self {
        Self { agents, face_south, config }
    }

    /// Run the scenario's trials against `agent`.
    pub fn run<A, C, O>(&self, agent: A, clock: C, observer: &mut O) -> MeasureResult<TrialSummary>
    where
        A: AgentControl,
        C: Clock,
        O: TrialObserver,
    {
        TrialRunner::new(agent, clock, self.config)?.run(observer)
    }

    /// The result-file row for `summary` measured under this scenario.
    pub fn record(&self, summary: &TrialSummary) -> TrialRecord {
        let p = &self.config.probe;
        TrialRecord {
            agents:        self.agents,
            face_south:    self.face_south,
            duration_secs: p.duration_secs,
            lag_secs:      p.lag_secs,
            velocity:      p.velocity,
            repeats:       summary.repeats() as u32,
            abs_mean:      summary.abs_error.mean,
            abs_std:       summary.abs_error.std,
            rel_mean:      summary.rel_error.mean,
            rel_std:       summary.rel_error.std,
        }
    }
}

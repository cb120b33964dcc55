//! The repeated-trial runner and its state machine.

use std::fmt;

use sd_agent::AgentControl;
use sd_core::{Clock, Pose, Summary, TrialConfig};

use crate::{Evaluation, MeasureError, MeasureResult, TrialObserver, evaluate, probe};

// ── TrialPhase ────────────────────────────────────────────────────────────────

/// State of a [`TrialRunner`].
///
/// ```text
/// Idle → Homing → Probing → Evaluating → Accumulating ─┬→ Homing (next repeat)
///                                                      └→ Done
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TrialPhase {
    Idle,
    Homing,
    Probing,
    Evaluating,
    Accumulating,
    Done,
}

impl fmt::Display for TrialPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrialPhase::Idle         => "idle",
            TrialPhase::Homing       => "homing",
            TrialPhase::Probing      => "probing",
            TrialPhase::Evaluating   => "evaluating",
            TrialPhase::Accumulating => "accumulating",
            TrialPhase::Done         => "done",
        };
        f.write_str(s)
    }
}

// ── TrialSummary ──────────────────────────────────────────────────────────────

/// Per-repeat rows of a finished run plus their reduction.
#[derive(Clone, Debug, PartialEq)]
pub struct TrialSummary {
    /// One `(actual, expected, relative_error)` row per repeat, in order.
    pub rows:      Vec<Evaluation>,
    /// Mean / population std of `expected - actual`.
    pub abs_error: Summary,
    /// Mean / population std of `(expected - actual) / expected`.
    pub rel_error: Summary,
}

impl TrialSummary {
    pub fn from_rows(rows: Vec<Evaluation>) -> Self {
        let abs: Vec<f64> = rows.iter().map(Evaluation::absolute_error).collect();
        let rel: Vec<f64> = rows.iter().map(Evaluation::relative_shortfall).collect();
        Self {
            abs_error: Summary::of(&abs),
            rel_error: Summary::of(&rel),
            rows,
        }
    }

    #[inline]
    pub fn repeats(&self) -> usize {
        self.rows.len()
    }
}

// ── TrialRunner ───────────────────────────────────────────────────────────────

/// Runs `config.repeats` probes of one agent under identical nominal
/// conditions.
///
/// Drive it to completion with [`run`][Self::run], or one transition at a
/// time with [`step`][Self::step].  A failure in any phase aborts the run:
/// partial rows are never summarised.
pub struct TrialRunner<A: AgentControl, C: Clock> {
    agent:   A,
    clock:   C,
    config:  TrialConfig,
    phase:   TrialPhase,
    /// Index of the repeat in progress.
    repeat:  usize,
    sample:  Option<(Pose, Pose)>,
    current: Option<Evaluation>,
    rows:    Vec<Evaluation>,
}

impl<A: AgentControl, C: Clock> TrialRunner<A, C> {
    /// Validate `config` and return an idle runner.
    pub fn new(agent: A, clock: C, config: TrialConfig) -> MeasureResult<Self> {
        config.validate()?;
        Ok(Self {
            agent,
            clock,
            config,
            phase:   TrialPhase::Idle,
            repeat:  0,
            sample:  None,
            current: None,
            rows:    Vec::with_capacity(config.repeats),
        })
    }

    #[inline]
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// Rows accumulated so far.
    #[inline]
    pub fn rows(&self) -> &[Evaluation] {
        &self.rows
    }

    pub fn into_agent(self) -> A {
        self.agent
    }

    /// Perform the work of the current phase and move to the next one.
    /// Returns the new phase.  A no-op once `Done`.
    pub fn step<O: TrialObserver>(&mut self, observer: &mut O) -> MeasureResult<TrialPhase> {
        let next = match self.phase {
            TrialPhase::Idle => TrialPhase::Homing,

            TrialPhase::Homing => {
                // Re-home every repeat; otherwise drift carries over.
                self.agent.teleport(self.config.home)?;
                self.clock.sleep_secs(self.config.settle_secs);
                TrialPhase::Probing
            }

            TrialPhase::Probing => {
                self.sample = Some(probe(&mut self.agent, &self.clock, &self.config.probe)?);
                TrialPhase::Evaluating
            }

            TrialPhase::Evaluating => {
                let (before, after) = self
                    .sample
                    .take()
                    .ok_or(MeasureError::IncompleteTrials { expected: self.config.repeats, got: self.rows.len() })?;
                let p = &self.config.probe;
                self.current = Some(evaluate(before, after, p.duration_secs, p.velocity)?);
                TrialPhase::Accumulating
            }

            TrialPhase::Accumulating => {
                let eval = self
                    .current
                    .take()
                    .ok_or(MeasureError::IncompleteTrials { expected: self.config.repeats, got: self.rows.len() })?;
                self.rows.push(eval);
                self.clock.sleep_secs(self.config.settle_secs);

                tracing::debug!(
                    repeat   = self.repeat,
                    actual   = eval.actual_distance,
                    expected = eval.expected_distance,
                    error    = eval.relative_error,
                    "repeat finished"
                );
                observer.on_repeat_end(self.repeat, &eval);

                self.repeat += 1;
                if self.repeat < self.config.repeats {
                    TrialPhase::Homing
                } else {
                    TrialPhase::Done
                }
            }

            TrialPhase::Done => return Ok(TrialPhase::Done),
        };

        self.phase = next;
        tracing::trace!(repeat = self.repeat, phase = %next, "phase entered");
        observer.on_phase(self.repeat, next);
        Ok(next)
    }

    /// Run every remaining phase and reduce the rows.
    ///
    /// # Errors
    /// Any agent failure aborts the run.  [`MeasureError::IncompleteTrials`]
    /// if the run ended with a row count other than `config.repeats`.
    pub fn run<O: TrialObserver>(&mut self, observer: &mut O) -> MeasureResult<TrialSummary> {
        while self.step(observer)? != TrialPhase::Done {}

        if self.rows.len() != self.config.repeats {
            return Err(MeasureError::IncompleteTrials {
                expected: self.config.repeats,
                got:      self.rows.len(),
            });
        }

        let summary = TrialSummary::from_rows(self.rows.clone());
        tracing::info!(
            agent    = self.agent.name(),
            repeats  = summary.repeats(),
            abs_mean = summary.abs_error.mean,
            abs_std  = summary.abs_error.std,
            rel_mean = summary.rel_error.mean,
            rel_std  = summary.rel_error.std,
            "trial run complete"
        );
        observer.on_run_end(&summary);
        Ok(summary)
    }
}

/// Run `config.repeats` homed probes of `agent` and summarise them.
pub fn repeat<A, C, O>(agent: A, clock: C, config: TrialConfig, observer: &mut O) -> MeasureResult<TrialSummary>
where
    A: AgentControl,
    C: Clock,
    O: TrialObserver,
{
    TrialRunner::new(agent, clock, config)?.run(observer)
}

//! Trial observer trait for progress reporting.

use crate::{Evaluation, TrialPhase, TrialSummary};

/// Callbacks invoked by [`TrialRunner::run`][crate::TrialRunner::run] as the
/// state machine advances.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: progress dots
///
/// ```rust,ignore
/// struct Dots;
///
/// impl TrialObserver for Dots {
///     fn on_repeat_end(&mut self, _repeat: usize, _eval: &Evaluation) {
///         print!(".");
///     }
/// }
/// ```
pub trait TrialObserver {
    /// Called on entering `phase` during repeat `repeat` (0-based).
    fn on_phase(&mut self, _repeat: usize, _phase: TrialPhase) {}

    /// Called once a repeat's row has been accumulated.
    fn on_repeat_end(&mut self, _repeat: usize, _eval: &Evaluation) {}

    /// Called once after the last repeat, with the reduced statistics.
    fn on_run_end(&mut self, _summary: &TrialSummary) {}
}

/// A [`TrialObserver`] that does nothing.
pub struct NoopObserver;

impl TrialObserver for NoopObserver {}

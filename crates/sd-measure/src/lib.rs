//! `sd-measure` — live measurement of simulator slowdown.
//!
//! # Pipeline
//!
//! ```text
//! for each repeat in 0..n:
//!   ① Homing        teleport the focal agent to the home pose, settle.
//!   ② Probing       stop, drive forward, skip the acceleration lag,
//!                   sample pose, wait the nominal duration, sample pose,
//!                   stop.
//!   ③ Evaluating    actual vs. expected displacement, relative error.
//!   ④ Accumulating  append (actual, expected, error), settle.
//! then reduce the n rows to mean / population std of the absolute and
//! relative shortfall.
//! ```
//!
//! Every wait goes through a [`sd_core::Clock`], so a
//! [`sd_core::VirtualClock`] runs the whole pipeline instantly.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sd_core::{TrialConfig, WallClock};
//! use sd_measure::{NoopObserver, Scenario, TrialRunner};
//!
//! let scenario = Scenario::new(10, false, TrialConfig::default());
//! let mut runner = TrialRunner::new(&mut bee, WallClock::new(), scenario.config)?;
//! let summary = runner.run(&mut NoopObserver)?;
//! let record = scenario.record(&summary);
//! ```

pub mod error;
pub mod evaluate;
pub mod observer;
pub mod probe;
pub mod repeater;
pub mod scenario;


pub use error::{MeasureError, MeasureResult};
pub use evaluate::{Evaluation, evaluate};
pub use observer::{NoopObserver, TrialObserver};
pub use probe::{probe, probe_from_rest};
pub use repeater::{TrialPhase, TrialRunner, TrialSummary, repeat};
pub use scenario::Scenario;

//! Nominal measurement parameters.
//!
//! Typically loaded from a TOML file by the application crate and passed to
//! the trial runner.  Defaults reproduce the reference protocol: 4 s at
//! 1.5 units/s after a 0.5 s acceleration lag, five repeats.

use crate::{CoreError, CoreResult, Pose};

// ── ProbeConfig ───────────────────────────────────────────────────────────────

/// Parameters of a single velocity-for-duration probe.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProbeConfig {
    /// Seconds between the two pose samples.
    pub duration_secs: f64,
    /// Commanded forward speed, applied to both wheels.
    pub velocity: f64,
    /// Seconds of commanded motion skipped before the first sample, so the
    /// acceleration ramp does not bias the displacement low.
    pub lag_secs: f64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            duration_secs: 4.0,
            velocity:      1.5,
            lag_secs:      0.5,
        }
    }
}

impl ProbeConfig {
    /// Displacement the agent should cover while sampled: `velocity * duration`.
    #[inline]
    pub fn expected_distance(&self) -> f64 {
        self.velocity * self.duration_secs
    }

    /// Reject parameters for which the relative error is undefined.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(CoreError::Precondition(format!(
                "probe duration must be positive and finite, got {}",
                self.duration_secs
            )));
        }
        if !self.velocity.is_finite() || self.velocity <= 0.0 {
            return Err(CoreError::Precondition(format!(
                "probe velocity must be positive and finite, got {}",
                self.velocity
            )));
        }
        if !self.lag_secs.is_finite() || self.lag_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "acceleration lag must be non-negative, got {}",
                self.lag_secs
            )));
        }
        Ok(())
    }
}

// ── TrialConfig ───────────────────────────────────────────────────────────────

/// Parameters of a repeated-trial run for one scenario.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrialConfig {
    /// Number of probes per scenario.  Must be at least 1.
    pub repeats: usize,
    /// Fixed pause after each teleport and after each probe.
    pub settle_secs: f64,
    /// Pose the agent is teleported to before every probe.
    pub home: Pose,
    pub probe: ProbeConfig,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            repeats:     5,
            settle_secs: 0.25,
            home:        Pose::new(-10.0, 0.0, 0.0),
            probe:       ProbeConfig::default(),
        }
    }
}

impl TrialConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if self.repeats == 0 {
            return Err(CoreError::Config("repeat count must be at least 1".into()));
        }
        if !self.settle_secs.is_finite() || self.settle_secs < 0.0 {
            return Err(CoreError::Config(format!(
                "settle pause must be non-negative, got {}",
                self.settle_secs
            )));
        }
        self.probe.validate()
    }
}

//! Trial evaluator: turn two poses into displacement error.

use sd_core::{CoreError, CoreResult, Pose};

/// Outcome of one probe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Euclidean distance between the two samples.  Always `>= 0`.
    pub actual_distance:   f64,
    /// `velocity * duration`.
    pub expected_distance: f64,
    /// `(actual - expected) / expected`: negative when the agent fell short.
    pub relative_error:    f64,
}

impl Evaluation {
    /// Shortfall `expected - actual`.  Positive when the agent fell short.
    #[inline]
    pub fn absolute_error(&self) -> f64 {
        self.expected_distance - self.actual_distance
    }

    /// Shortfall relative to the expectation, `(expected - actual) / expected`.
    ///
    /// This is the sign convention of the summarised result files, the
    /// negation of [`relative_error`][Self::relative_error].
    #[inline]
    pub fn relative_shortfall(&self) -> f64 {
        self.absolute_error() / self.expected_distance
    }
}

/// Compare the observed displacement with `velocity * duration`.
///
/// # Errors
/// [`CoreError::Precondition`] unless the expected displacement is positive
/// and finite.
pub fn evaluate(before: Pose, after: Pose, duration: f64, velocity: f64) -> CoreResult<Evaluation> {
    let expected = velocity * duration;
    if !expected.is_finite() || expected <= 0.0 {
        return Err(CoreError::Precondition(format!(
            "expected displacement velocity * duration = {velocity} * {duration} must be positive and finite"
        )));
    }

    let actual = before.distance_to(after);
    Ok(Evaluation {
        actual_distance:   actual,
        expected_distance: expected,
        relative_error:    (actual - expected) / expected,
    })
}

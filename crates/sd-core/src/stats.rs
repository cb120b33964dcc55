//! Summary statistics over repeated trials.
//!
//! The standard deviation is the *population* form (divide by `n`), not the
//! sample form.  Repeats are summarised as a complete set, and the recorded
//! result files have always used that convention.

/// Mean and population standard deviation of a sample.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    pub mean: f64,
    pub std:  f64,
}

impl Summary {
    /// Summarise `values`.  An empty slice yields `NaN` for both fields.
    pub fn of(values: &[f64]) -> Self {
        Self {
            mean: mean(values),
            std:  population_std(values),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3} ({:.3})", self.mean, self.std)
    }
}

/// Arithmetic mean.  `NaN` for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (`sqrt(Σ(x - μ)² / n)`).  `NaN` for an
/// empty slice.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    let mu = mean(values);
    let var = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

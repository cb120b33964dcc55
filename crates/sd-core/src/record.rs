//! Trial records and the fixed result-file column schema.
//!
//! A result file is a headerless table of numeric rows.  Column positions
//! are load-bearing: the analysis pass addresses them by index, so they must
//! never be reordered.
//!
//! | Index | Column            | Notes                                    |
//! |-------|-------------------|------------------------------------------|
//! | 0     | agent count       | primary agents (bees) in the world       |
//! | 1     | south-facing flag | `0` / `1`                                |
//! | 2     | duration          | nominal probe duration, seconds          |
//! | 3     | acceleration lag  | seconds skipped before sampling          |
//! | 4     | velocity          | nominal commanded speed                  |
//! | 5     | repeat count      |                                          |
//! | 6     | mean abs. error   | `expected - actual`, averaged            |
//! | 7     | std abs. error    | population std                           |
//! | 8     | mean rel. error   | `(expected - actual) / expected`         |
//! | 9     | std rel. error    | plotted as the variability band          |

use crate::{CoreError, CoreResult};

pub const COL_AGENTS:     usize = 0;
pub const COL_FACE_SOUTH: usize = 1;
pub const COL_DURATION:   usize = 2;
pub const COL_LAG:        usize = 3;
pub const COL_VELOCITY:   usize = 4;
pub const COL_REPEATS:    usize = 5;
pub const COL_ABS_MEAN:   usize = 6;
pub const COL_ABS_STD:    usize = 7;
pub const COL_REL_MEAN:   usize = 8;
pub const COL_REL_STD:    usize = 9;

/// Number of columns in a result row.
pub const COLUMN_COUNT: usize = 10;

// ── TrialRecord ───────────────────────────────────────────────────────────────

/// One scenario's summarised outcome: a single result-file row.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialRecord {
    pub agents:        u32,
    pub face_south:    bool,
    pub duration_secs: f64,
    pub lag_secs:      f64,
    pub velocity:      f64,
    pub repeats:       u32,
    pub abs_mean:      f64,
    pub abs_std:       f64,
    pub rel_mean:      f64,
    pub rel_std:       f64,
}

impl TrialRecord {
    /// Positional numeric form, in schema order.
    pub fn to_row(&self) -> [f64; COLUMN_COUNT] {
        [
            self.agents as f64,
            if self.face_south { 1.0 } else { 0.0 },
            self.duration_secs,
            self.lag_secs,
            self.velocity,
            self.repeats as f64,
            self.abs_mean,
            self.abs_std,
            self.rel_mean,
            self.rel_std,
        ]
    }

    /// Rebuild a record from a positional row, validating the schema.
    ///
    /// Count columns must hold non-negative integers, the flag must be 0 or
    /// 1, and the nominal duration/velocity must be finite.  Error columns
    /// are taken verbatim.
    pub fn from_row(row: &[f64]) -> CoreResult<Self> {
        if row.len() != COLUMN_COUNT {
            return Err(CoreError::Schema(format!(
                "expected {COLUMN_COUNT} columns, found {}",
                row.len()
            )));
        }

        let agents = count_column(row, COL_AGENTS, "agent count")?;
        let repeats = count_column(row, COL_REPEATS, "repeat count")?;
        let face_south = match row[COL_FACE_SOUTH] {
            f if f == 0.0 => false,
            f if f == 1.0 => true,
            f => {
                return Err(CoreError::Schema(format!(
                    "column {COL_FACE_SOUTH} (south-facing flag) must be 0 or 1, found {f}"
                )));
            }
        };
        for (idx, what) in [(COL_DURATION, "duration"), (COL_LAG, "lag"), (COL_VELOCITY, "velocity")] {
            if !row[idx].is_finite() {
                return Err(CoreError::Schema(format!(
                    "column {idx} ({what}) must be finite, found {}",
                    row[idx]
                )));
            }
        }

        Ok(Self {
            agents,
            face_south,
            duration_secs: row[COL_DURATION],
            lag_secs:      row[COL_LAG],
            velocity:      row[COL_VELOCITY],
            repeats,
            abs_mean:      row[COL_ABS_MEAN],
            abs_std:       row[COL_ABS_STD],
            rel_mean:      row[COL_REL_MEAN],
            rel_std:       row[COL_REL_STD],
        })
    }
}

fn count_column(row: &[f64], idx: usize, what: &str) -> CoreResult<u32> {
    let v = row[idx];
    if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u32::MAX as f64 {
        Ok(v as u32)
    } else {
        Err(CoreError::Schema(format!(
            "column {idx} ({what}) must be a non-negative integer, found {v}"
        )))
    }
}

// ── ResultMatrix ──────────────────────────────────────────────────────────────

/// The ordered rows of one scenario sweep.  Immutable once loaded.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResultMatrix {
    records: Vec<TrialRecord>,
}

impl ResultMatrix {
    pub fn new(records: Vec<TrialRecord>) -> Self {
        Self { records }
    }

    #[inline]
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One column as a vector, addressed by schema index.
    ///
    /// # Panics
    /// Panics if `idx >= COLUMN_COUNT`.
    pub fn column(&self, idx: usize) -> Vec<f64> {
        assert!(idx < COLUMN_COUNT, "column index {idx} out of range");
        self.records.iter().map(|r| r.to_row()[idx]).collect()
    }
}

impl FromIterator<TrialRecord> for ResultMatrix {
    fn from_iter<I: IntoIterator<Item = TrialRecord>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}

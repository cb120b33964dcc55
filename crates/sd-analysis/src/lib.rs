//! `sd-analysis` — offline analysis of recorded slowdown sweeps.
//!
//! | Module      | Responsibility                                              |
//! |-------------|-------------------------------------------------------------|
//! | [`cost`]    | Real seconds per simulated second, singular-row detection  |
//! | [`dataset`] | Labelled result matrices, ordered set keyed by file name    |
//! | [`compare`] | Per-dataset relative-error and cost series, palette, labels |
//!
//! ```rust,ignore
//! let entries = sd_output::load_manifest(Path::new("manifest.csv"))?;
//! let datasets = sd_analysis::load_datasets(entries, Path::new("results"))?;
//! let cmp = sd_analysis::compare(&datasets, true);
//! sd_output::write_band_series(Path::new("relative_error.csv"), &cmp.band_rows())?;
//! ```

pub mod compare;
pub mod cost;
pub mod dataset;
pub mod error;

#[cfg(test)]
mod tests;

pub use compare::{Comparison, Palette, Series, compare};
pub use cost::{CostBreakdown, Singularity, derive_cost, singularities};
pub use dataset::{Dataset, DatasetSet, load_datasets};
pub use error::{AnalysisError, AnalysisResult};

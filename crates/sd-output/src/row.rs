//! Plain data row types written by the output functions.

/// One repeat of a trial run, in the raw per-repeat file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawRow {
    pub actual:         f64,
    pub expected:       f64,
    pub relative_error: f64,
}

/// One point of a relative-error series with its variability band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandRow {
    pub label: String,
    pub color: &'static str,
    pub x:     f64,
    pub y:     f64,
    pub lower: f64,
    pub upper: f64,
}

/// One point of a cost (real seconds per simulated second) series.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub label:        String,
    pub color:        &'static str,
    pub x:            f64,
    pub real_per_sim: f64,
}

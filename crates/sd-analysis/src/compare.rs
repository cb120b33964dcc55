//! Dataset comparison: relative-error and cost series per dataset.

use sd_core::record::{COL_REL_MEAN, COL_REL_STD};
use sd_output::{BandRow, CostRow};

use crate::{DatasetSet, Singularity, derive_cost, singularities};

pub const X_LABEL_PRIMARY: &str = "number of bees";
pub const X_LABEL_FOLDED: &str = "number of agents (bee+casu)";
pub const Y_LABEL_RELATIVE_ERROR: &str = "relative error (slowdown)";
pub const Y_LABEL_COST: &str = "seconds used per simulated second";

// ── Palette ───────────────────────────────────────────────────────────────────

/// Fixed cyclic colour assignment.  More datasets than colours simply wrap.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    colors: &'static [&'static str],
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        colors: &["blue", "red", "green", "magenta", "cyan", "black", "yellow"],
    };

    pub fn color_for(&self, index: usize) -> &'static str {
        self.colors[index % self.colors.len()]
    }
}

// ── Series ────────────────────────────────────────────────────────────────────

/// One dataset's points on one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label:  String,
    pub color:  &'static str,
    /// `(x, y)` in row order.
    pub points: Vec<(f64, f64)>,
    /// `(lower, upper)` per point, when the chart shows a variability band.
    pub band:   Option<Vec<(f64, f64)>>,
}

impl Series {
    /// Points whose `y` is a finite number.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied().filter(|(_, y)| y.is_finite())
    }
}

// ── Comparison ────────────────────────────────────────────────────────────────

/// Everything needed to draw the two comparison charts.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub x_label:        &'static str,
    /// Relative error with a `mean ± std` band.
    pub relative_error: Vec<Series>,
    /// Real seconds per simulated second, point estimates only.
    pub cost:           Vec<Series>,
    /// Non-finite cost rows, tagged with their dataset's display label.
    pub singularities:  Vec<(String, Singularity)>,
}

impl Comparison {
    pub fn band_rows(&self) -> Vec<BandRow> {
        self.relative_error
            .iter()
            .flat_map(|s| {
                let band = s.band.as_deref().unwrap_or(&[]);
                s.points.iter().enumerate().map(move |(i, &(x, y))| {
                    let (lower, upper) = band.get(i).copied().unwrap_or((y, y));
                    BandRow { label: s.label.clone(), color: s.color, x, y, lower, upper }
                })
            })
            .collect()
    }

    pub fn cost_rows(&self) -> Vec<CostRow> {
        self.cost
            .iter()
            .flat_map(|s| {
                s.points.iter().map(move |&(x, real_per_sim)| CostRow {
                    label: s.label.clone(),
                    color: s.color,
                    x,
                    real_per_sim,
                })
            })
            .collect()
    }
}

/// Compare every dataset in `datasets`, colouring them in iteration order.
pub fn compare(datasets: &DatasetSet, fold_secondary_agents: bool) -> Comparison {
    let palette = Palette::DEFAULT;
    let mut out = Comparison {
        x_label:        if fold_secondary_agents { X_LABEL_FOLDED } else { X_LABEL_PRIMARY },
        relative_error: Vec::with_capacity(datasets.len()),
        cost:           Vec::with_capacity(datasets.len()),
        singularities:  Vec::new(),
    };

    for (i, ds) in datasets.iter().enumerate() {
        let label = ds.display_label();
        let color = palette.color_for(i);
        let xs = ds.x_values(fold_secondary_agents);

        let mean = ds.matrix.column(COL_REL_MEAN);
        let spread = ds.matrix.column(COL_REL_STD);
        out.relative_error.push(Series {
            label:  label.clone(),
            color,
            points: xs.iter().copied().zip(mean.iter().copied()).collect(),
            band:   Some(mean.iter().zip(&spread).map(|(m, s)| (m - s, m + s)).collect()),
        });

        let costs = derive_cost(&ds.matrix);
        for s in singularities(&ds.matrix, &costs) {
            tracing::warn!(
                dataset = %label,
                row     = s.row,
                agents  = s.agents,
                value   = s.value,
                "cost is not finite; agent did not move"
            );
            out.singularities.push((label.clone(), s));
        }
        out.cost.push(Series {
            label,
            color,
            points: xs.into_iter().zip(costs).collect(),
            band:   None,
        });
    }

    out
}

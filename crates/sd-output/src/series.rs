//! Comparison series export.
//!
//! Both files carry a header row and one line per plotted point, grouped by
//! series in the order given.

use std::path::Path;

use serde::Serialize;

use crate::csv::write_whole;
use crate::{BandRow, CostRow, OutputResult};

#[derive(Serialize)]
struct CostLine<'a> {
    label:        &'a str,
    color:        &'a str,
    x:            f64,
    real_per_sim: f64,
    finite:       bool,
}

#[derive(Serialize)]
struct BandLine<'a> {
    label: &'a str,
    color: &'a str,
    x:     f64,
    y:     f64,
    lower: f64,
    upper: f64,
}

/// Write `label,color,x,y,lower,upper` rows.
pub fn write_band_series(path: &Path, rows: &[BandRow]) -> OutputResult<()> {
    write_whole(path, true, |w| {
        for r in rows {
            w.serialize(BandLine {
                label: &r.label,
                color: r.color,
                x:     r.x,
                y:     r.y,
                lower: r.lower,
                upper: r.upper,
            })?;
        }
        Ok(())
    })?;
    tracing::debug!(path = %path.display(), points = rows.len(), "relative-error series written");
    Ok(())
}

/// Write `label,color,x,real_per_sim,finite` rows.  Non-finite costs are
/// kept; `finite` flags them for consumers that filter.
pub fn write_cost_series(path: &Path, rows: &[CostRow]) -> OutputResult<()> {
    write_whole(path, true, |w| {
        for r in rows {
            w.serialize(CostLine {
                label:        &r.label,
                color:        r.color,
                x:            r.x,
                real_per_sim: r.real_per_sim,
                finite:       r.real_per_sim.is_finite(),
            })?;
        }
        Ok(())
    })?;
    tracing::debug!(path = %path.display(), points = rows.len(), "cost series written");
    Ok(())
}

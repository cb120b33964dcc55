//! compare — put several recorded sweeps side by side.
//!
//! Reads a manifest of result files, derives the real-seconds-per-simulated-
//! second cost of every row, and writes two chart-ready series files into
//! `--out-dir`:
//!
//! | File                 | Columns                              |
//! |----------------------|--------------------------------------|
//! | `relative_error.csv` | `label,color,x,y,lower,upper`        |
//! | `cost.csv`           | `label,color,x,real_per_sim,finite`  |
//!
//! ```text
//! compare --manifest runs.csv --data-dir results -c --out-dir plots
//! ```


use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sd_analysis::compare::{Y_LABEL_COST, Y_LABEL_RELATIVE_ERROR};
use sd_analysis::{Comparison, compare, load_datasets};
use sd_output::{load_manifest, write_band_series, write_cost_series};

pub const RELATIVE_ERROR_FILE: &str = "relative_error.csv";
pub const COST_FILE: &str = "cost.csv";

#[derive(Debug, Parser)]
#[command(name = "compare", about = "Compare recorded slowdown sweeps")]
struct Args {
    /// Headerless `file,label,casus` list of result files.
    #[arg(long)]
    manifest: PathBuf,

    /// Directory the manifest's file names are relative to.
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Count CASUs as agents on the x axis.
    #[arg(short = 'c', long)]
    fold_secondary: bool,

    /// Where the series files go.
    #[arg(short = 'o', long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let cmp = run(&args.manifest, &args.data_dir, args.fold_secondary, &args.out_dir)?;
    report(&cmp);
    Ok(())
}

/// Load, compare, export.
fn run(manifest: &Path, data_dir: &Path, fold: bool, out_dir: &Path) -> Result<Comparison> {
    let entries = load_manifest(manifest)
        .with_context(|| format!("loading manifest {}", manifest.display()))?;
    let datasets = load_datasets(entries, data_dir)?;
    let cmp = compare(&datasets, fold);

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    write_band_series(&out_dir.join(RELATIVE_ERROR_FILE), &cmp.band_rows())?;
    write_cost_series(&out_dir.join(COST_FILE), &cmp.cost_rows())?;
    tracing::info!(
        datasets = datasets.len(),
        out_dir  = %out_dir.display(),
        "series written"
    );
    Ok(cmp)
}

fn report(cmp: &Comparison) {
    tracing::info!(x = cmp.x_label, y = Y_LABEL_RELATIVE_ERROR, "chart 1");
    tracing::info!(x = cmp.x_label, y = Y_LABEL_COST, "chart 2");
    for (rel, cost) in cmp.relative_error.iter().zip(&cmp.cost) {
        for (&(x, y), &(_, c)) in rel.points.iter().zip(&cost.points) {
            tracing::info!(
                series       = %rel.label,
                color        = rel.color,
                x,
                rel_error    = y,
                real_per_sim = c,
                "point"
            );
        }
    }
    if !cmp.singularities.is_empty() {
        tracing::warn!(rows = cmp.singularities.len(), "some rows have no finite cost");
    }
}

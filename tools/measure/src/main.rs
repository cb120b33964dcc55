//! slowdown — measure how far a simulated world falls behind real time as
//! entities are added.
//!
//! For each requested bee count the focal bee `bee-000` is driven straight
//! ahead for a fixed time, repeatedly, and the distance it covers is
//! compared with what the commanded velocity promises.  One 10-column row
//! per count goes to the result file, ready for `compare`.
//!
//! ```text
//! slowdown --agents 1,11,21,41 --per-entity-slowdown 0.02 --virtual-time -o bees.csv
//! RUST_LOG=debug slowdown --config experiment.toml
//! ```

mod config;
mod sweep;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sd_agent::KinematicWorld;
use sd_core::{Clock, VirtualClock, WallClock};
use sd_output::{CsvRecordWriter, RecordWriter, write_raw_rows};

use config::{Args, ExperimentConfig};
use sweep::{ProgressDots, SweepOutput, run_sweep};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = ExperimentConfig::resolve(&args)?;
    tracing::info!(
        agents  = ?cfg.agents,
        casus   = cfg.casus,
        repeats = cfg.trial.repeats,
        spawn   = cfg.spawn,
        "starting sweep"
    );

    let out = if args.virtual_time {
        measure(VirtualClock::new(), &cfg)?
    } else {
        measure(WallClock::new(), &cfg)?
    };

    let mut writer = CsvRecordWriter::create(&args.out)?;
    for record in &out.records {
        writer.write_record(record)?;
    }
    writer.finish()?;
    tracing::info!(path = %args.out.display(), rows = out.records.len(), "results written");

    if let Some(raw) = &args.raw_out {
        write_raw_rows(raw, &out.raw)?;
        tracing::info!(path = %raw.display(), rows = out.raw.len(), "raw repeats written");
    }
    Ok(())
}

fn measure<C: Clock + Clone>(clock: C, cfg: &ExperimentConfig) -> Result<SweepOutput> {
    let mut world = KinematicWorld::new(clock.clone(), cfg.world.params());
    run_sweep(&mut world, clock, cfg, &mut ProgressDots)
}

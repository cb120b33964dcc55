//! Experiment file (TOML) plus command-line overrides.
//!
//! ```toml
//! agents     = [1, 11, 21, 41]
//! casus      = 0
//! spawn      = true
//! face_south = false
//! seed       = 42
//!
//! [trial]
//! repeats     = 5
//! settle_secs = 0.25
//! home        = { x = -10.0, y = 0.0, yaw = 0.0 }
//!
//! [trial.probe]
//! duration_secs = 4.0
//! velocity      = 1.5
//! lag_secs      = 0.5
//!
//! [world]
//! base_slowdown       = 1.0
//! per_entity_slowdown = 0.02
//! ramp_secs           = 0.3
//! ```
//!
//! Every key is optional.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;

use sd_agent::KinematicParams;
use sd_agent::spawn::DEFAULT_CASU_RADIUS;
use sd_core::TrialConfig;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "slowdown", about = "Measure how much a simulated world lags behind real time as it fills up")]
pub struct Args {
    /// Experiment file; command-line flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bee counts to measure, ascending (focal bee included).
    #[arg(short = 'n', long, value_delimiter = ',')]
    pub agents: Option<Vec<u32>>,

    /// CASUs spawned on a ring before the first measurement.
    #[arg(short = 'c', long)]
    pub casus: Option<u32>,

    /// Probes per agent count.
    #[arg(short = 'r', long)]
    pub repeats: Option<usize>,

    /// Only spawn the focal bee; distractors and CASUs are assumed present.
    #[arg(long)]
    pub no_spawn: bool,

    /// Distractors face away from the focal bee's path.
    #[arg(long)]
    pub face_south: bool,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Real seconds per simulated second of an empty world.
    #[arg(long)]
    pub base_slowdown: Option<f64>,

    /// Extra real seconds per simulated second for every entity.
    #[arg(long)]
    pub per_entity_slowdown: Option<f64>,

    /// Simulated seconds for wheel commands to reach full speed.
    #[arg(long)]
    pub ramp: Option<f64>,

    /// Advance a virtual clock instead of sleeping.
    #[arg(long)]
    pub virtual_time: bool,

    /// Result file (one 10-column row per agent count).
    #[arg(short = 'o', long, default_value = "slowdown.csv")]
    pub out: PathBuf,

    /// Optional per-repeat `actual,expected,relative_error` file.
    #[arg(long)]
    pub raw_out: Option<PathBuf>,
}

// ── Experiment file ───────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub base_slowdown:       f64,
    pub per_entity_slowdown: f64,
    pub ramp_secs:           f64,
    pub axle_width:          f64,
    pub casu_radius:         f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        let k = KinematicParams::default();
        Self {
            base_slowdown:       k.base_slowdown,
            per_entity_slowdown: k.per_entity_slowdown,
            ramp_secs:           k.ramp_secs,
            axle_width:          k.axle_width,
            casu_radius:         DEFAULT_CASU_RADIUS,
        }
    }
}

impl WorldConfig {
    pub fn params(&self) -> KinematicParams {
        KinematicParams {
            base_slowdown:       self.base_slowdown,
            per_entity_slowdown: self.per_entity_slowdown,
            ramp_secs:           self.ramp_secs,
            axle_width:          self.axle_width,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub agents:     Vec<u32>,
    pub casus:      u32,
    pub spawn:      bool,
    pub face_south: bool,
    /// `None` seeds spawn layouts from entropy.
    pub seed:       Option<u64>,
    pub trial:      TrialConfig,
    pub world:      WorldConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            agents:     vec![1],
            casus:      0,
            spawn:      true,
            face_south: false,
            seed:       None,
            trial:      TrialConfig::default(),
            world:      WorldConfig::default(),
        }
    }
}

impl ExperimentConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Defaults, then the experiment file, then command-line flags.
    pub fn resolve(args: &Args) -> Result<Self> {
        let mut cfg = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(agents) = &args.agents {
            cfg.agents = agents.clone();
        }
        if let Some(casus) = args.casus {
            cfg.casus = casus;
        }
        if let Some(repeats) = args.repeats {
            cfg.trial.repeats = repeats;
        }
        if args.no_spawn {
            cfg.spawn = false;
        }
        if args.face_south {
            cfg.face_south = true;
        }
        if args.seed.is_some() {
            cfg.seed = args.seed;
        }
        if let Some(v) = args.base_slowdown {
            cfg.world.base_slowdown = v;
        }
        if let Some(v) = args.per_entity_slowdown {
            cfg.world.per_entity_slowdown = v;
        }
        if let Some(v) = args.ramp {
            cfg.world.ramp_secs = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.agents.is_empty() {
            bail!("no agent counts to measure");
        }
        if self.agents.contains(&0) {
            bail!("agent counts include the focal bee and must be at least 1");
        }
        if self.agents.windows(2).any(|w| w[1] < w[0]) {
            bail!("agent counts must be ascending, got {:?}", self.agents);
        }
        if !(self.world.base_slowdown > 0.0) || self.world.per_entity_slowdown < 0.0 {
            bail!("slowdown factors must be positive");
        }
        if !(self.world.ramp_secs >= 0.0) {
            bail!("ramp must be non-negative");
        }
        self.trial.validate()?;
        Ok(())
    }
}

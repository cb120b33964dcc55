//! The agent-count sweep: grow the world, probe the focal bee, record a row.

use std::io::Write;

use anyhow::Result;

use sd_agent::{KinematicWorld, Population};
use sd_core::{Clock, EntityKind, SpawnRng, TrialRecord};
use sd_measure::{Evaluation, Scenario, TrialObserver, TrialSummary};
use sd_output::RawRow;

use crate::config::ExperimentConfig;

/// What a sweep produced.
#[derive(Debug, Default)]
pub struct SweepOutput {
    /// One row per agent count, in sweep order.
    pub records: Vec<TrialRecord>,
    /// Every repeat of every scenario, in run order.
    pub raw:     Vec<RawRow>,
}

/// Prints one dot per finished repeat to stderr.
pub struct ProgressDots;

impl TrialObserver for ProgressDots {
    fn on_repeat_end(&mut self, _repeat: usize, _eval: &Evaluation) {
        eprint!(".");
        let _ = std::io::stderr().flush();
    }

    fn on_run_end(&mut self, _summary: &TrialSummary) {
        eprintln!(" done");
    }
}

/// Run every scenario of `cfg` against `world`.
///
/// Entities are only ever added: each agent count spawns the distractors
/// missing since the previous one.  With `cfg.spawn` off only the focal bee
/// is spawned and the counts are recorded as given.
pub fn run_sweep<C, O>(
    world:    &mut KinematicWorld<C>,
    clock:    C,
    cfg:      &ExperimentConfig,
    observer: &mut O,
) -> Result<SweepOutput>
where
    C: Clock + Clone,
    O: TrialObserver,
{
    let mut rng = match cfg.seed {
        Some(seed) => SpawnRng::new(seed),
        None => SpawnRng::from_entropy(),
    };
    let mut population = Population::default();
    if cfg.spawn {
        population.spawn_casus(world, cfg.casus as usize, cfg.world.casu_radius)?;
    }
    population.ensure_focal(world, cfg.trial.home)?;
    let focal = EntityKind::Bee.name(0);

    let mut out = SweepOutput::default();
    for &agents in &cfg.agents {
        if cfg.spawn {
            population.grow_bees_to(world, &mut rng, agents as usize, cfg.face_south)?;
        }
        tracing::info!(
            agents,
            casus    = population.casus,
            entities = world.entity_count(),
            slowdown = world.slowdown(),
            "measuring"
        );

        let scenario = Scenario::new(agents, cfg.face_south, cfg.trial);
        let summary = scenario.run(world.agent(&focal)?, clock.clone(), observer)?;

        out.raw.extend(summary.rows.iter().map(|e| RawRow {
            actual:         e.actual_distance,
            expected:       e.expected_distance,
            relative_error: e.relative_error,
        }));
        out.records.push(scenario.record(&summary));
    }
    Ok(out)
}

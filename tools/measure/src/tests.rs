//! Tests for the slowdown sweep and its configuration.

#[cfg(test)]
mod config_tests {
    use clap::Parser;

    use crate::config::{Args, ExperimentConfig};

    #[test]
    fn defaults_without_file_or_flags() {
        let cfg = ExperimentConfig::resolve(&Args::parse_from(["slowdown"])).unwrap();
        assert_eq!(cfg.agents, vec![1]);
        assert_eq!(cfg.trial.repeats, 5);
        assert_eq!(cfg.trial.probe.velocity, 1.5);
        assert!(cfg.spawn);
    }

    #[test]
    fn toml_file_with_partial_tables() {
        let cfg: ExperimentConfig = toml::from_str(
            r#"
            agents = [1, 21]
            casus  = 4

            [trial.probe]
            velocity = 2.0

            [world]
            per_entity_slowdown = 0.05
            "#,
        )
        .unwrap();
        assert_eq!(cfg.agents, vec![1, 21]);
        assert_eq!(cfg.casus, 4);
        assert_eq!(cfg.trial.probe.velocity, 2.0);
        assert_eq!(cfg.trial.probe.duration_secs, 4.0);
        assert_eq!(cfg.trial.settle_secs, 0.25);
        assert_eq!(cfg.world.per_entity_slowdown, 0.05);
        assert_eq!(cfg.world.casu_radius, 25.0);
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exp.toml");
        std::fs::write(&path, "agents = [1, 2]\nseed = 1\n[trial]\nrepeats = 9\n").unwrap();

        let args = Args::parse_from([
            "slowdown",
            "--config",
            path.to_str().unwrap(),
            "--agents",
            "1,11,21",
            "-r",
            "3",
            "--no-spawn",
        ]);
        let cfg = ExperimentConfig::resolve(&args).unwrap();
        assert_eq!(cfg.agents, vec![1, 11, 21]);
        assert_eq!(cfg.trial.repeats, 3);
        assert_eq!(cfg.seed, Some(1));
        assert!(!cfg.spawn);
    }

    #[test]
    fn descending_counts_rejected() {
        let args = Args::parse_from(["slowdown", "--agents", "10,5"]);
        assert!(ExperimentConfig::resolve(&args).is_err());
    }

    #[test]
    fn zero_count_rejected() {
        let args = Args::parse_from(["slowdown", "--agents", "0,5"]);
        assert!(ExperimentConfig::resolve(&args).is_err());
    }

    #[test]
    fn negative_velocity_in_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exp.toml");
        std::fs::write(&path, "[trial.probe]\nvelocity = -1.5\n").unwrap();
        let args = Args::parse_from(["slowdown", "--config", path.to_str().unwrap()]);
        assert!(ExperimentConfig::resolve(&args).is_err());
    }

    #[test]
    fn zero_repeats_rejected() {
        let args = Args::parse_from(["slowdown", "-r", "0"]);
        assert!(ExperimentConfig::resolve(&args).is_err());
    }
}

#[cfg(test)]
mod sweep_tests {
    use sd_agent::KinematicWorld;
    use sd_core::{EntityKind, ResultMatrix, VirtualClock};
    use sd_measure::NoopObserver;

    use crate::config::ExperimentConfig;
    use crate::sweep::run_sweep;

    fn experiment(agents: Vec<u32>, casus: u32) -> ExperimentConfig {
        let mut cfg = ExperimentConfig {
            agents,
            casus,
            seed: Some(7),
            ..ExperimentConfig::default()
        };
        cfg.trial.repeats = 3;
        cfg.world.per_entity_slowdown = 0.1;
        cfg
    }

    fn sweep(cfg: &ExperimentConfig) -> (KinematicWorld<VirtualClock>, crate::sweep::SweepOutput) {
        let clock = VirtualClock::new();
        let mut world = KinematicWorld::new(clock.clone(), cfg.world.params());
        let out = run_sweep(&mut world, clock, cfg, &mut NoopObserver).unwrap();
        (world, out)
    }

    #[test]
    fn one_row_per_count_and_world_grows() {
        let cfg = experiment(vec![1, 5, 9], 0);
        let (world, out) = sweep(&cfg);

        let agents: Vec<u32> = out.records.iter().map(|r| r.agents).collect();
        assert_eq!(agents, [1, 5, 9]);
        assert_eq!(world.count_of(EntityKind::Bee), 9);
        assert_eq!(out.raw.len(), 9);
        assert!(out.records.iter().all(|r| r.repeats == 3));
    }

    #[test]
    fn shortfall_grows_with_load() {
        let cfg = experiment(vec![1, 11, 21], 0);
        let (_, out) = sweep(&cfg);
        let rel: Vec<f64> = out.records.iter().map(|r| r.rel_mean).collect();
        assert!(rel[0] < rel[1] && rel[1] < rel[2], "{rel:?}");
    }

    #[test]
    fn derived_cost_matches_injected_slowdown() {
        let cfg = experiment(vec![1, 11], 4);
        let (_, out) = sweep(&cfg);

        let matrix: ResultMatrix = out.records.into_iter().collect();
        let cost = sd_analysis::derive_cost(&matrix);
        // slowdown = 1.0 + 0.1 · (bees + casus)
        assert!((cost[0] - 1.5).abs() < 1e-6, "{cost:?}");
        assert!((cost[1] - 2.5).abs() < 1e-6, "{cost:?}");
    }

    #[test]
    fn casus_spawned_once() {
        let cfg = experiment(vec![1, 3], 6);
        let (world, _) = sweep(&cfg);
        assert_eq!(world.count_of(EntityKind::Casu), 6);
    }

    #[test]
    fn no_spawn_keeps_only_focal_bee() {
        let mut cfg = experiment(vec![1, 50], 3);
        cfg.spawn = false;
        let (world, out) = sweep(&cfg);
        assert_eq!(world.entity_count(), 1);
        assert_eq!(out.records[1].agents, 50);
    }
}

//! Unit tests for sd-core primitives.

#[cfg(test)]
mod pose {
    use crate::Pose;

    #[test]
    fn distance_is_euclidean() {
        let a = Pose::new(0.0, 0.0, 0.0);
        let b = Pose::new(3.0, 4.0, 1.2);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
        assert!((b.distance_to(a) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn distance_to_self_is_zero() {
        let p = Pose::new(-10.0, 2.5, 0.3);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn heading_does_not_affect_distance() {
        let a = Pose::new(1.0, 1.0, 0.0);
        let b = Pose::new(1.0, 1.0, std::f64::consts::PI);
        assert_eq!(a.distance_to(b), 0.0);
    }

    #[test]
    fn from_tuple() {
        let p: Pose = (1.0, 2.0, 3.0).into();
        assert_eq!(p, Pose::new(1.0, 2.0, 3.0));
    }
}

#[cfg(test)]
mod entity {
    use crate::EntityKind;

    #[test]
    fn canonical_names() {
        assert_eq!(EntityKind::Bee.name(0), "bee-000");
        assert_eq!(EntityKind::Bee.name(42), "bee-042");
        assert_eq!(EntityKind::Casu.name(3), "casu-b03");
    }

    #[test]
    fn only_bees_are_mobile() {
        assert!(EntityKind::Bee.is_mobile());
        assert!(!EntityKind::Casu.is_mobile());
    }

    #[test]
    fn display() {
        assert_eq!(EntityKind::Casu.to_string(), "Casu");
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, VirtualClock};

    #[test]
    fn virtual_clock_advances_on_sleep() {
        let clock = VirtualClock::new();
        assert_eq!(clock.now_secs(), 0.0);
        clock.sleep_secs(0.5);
        clock.sleep_secs(4.0);
        assert!((clock.now_secs() - 4.5).abs() < 1e-12);
    }

    #[test]
    fn clones_share_time() {
        let a = VirtualClock::new();
        let b = a.clone();
        a.advance(2.0);
        assert_eq!(b.now_secs(), 2.0);
    }

    #[test]
    fn negative_and_nan_sleeps_are_ignored() {
        let clock = VirtualClock::new();
        clock.sleep_secs(-1.0);
        clock.sleep_secs(f64::NAN);
        assert_eq!(clock.now_secs(), 0.0);
    }

    #[test]
    fn clock_by_reference() {
        fn wait<C: Clock>(c: C) {
            c.sleep_secs(1.0);
        }
        let clock = VirtualClock::new();
        wait(&clock);
        assert_eq!(clock.now_secs(), 1.0);
    }
}

#[cfg(test)]
mod rng {
    use crate::SpawnRng;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SpawnRng::new(7);
        let mut b = SpawnRng::new(7);
        for _ in 0..100 {
            assert_eq!(a.uniform(-10.0, 10.0), b.uniform(-10.0, 10.0));
        }
    }

    #[test]
    fn uniform_stays_in_range() {
        let mut rng = SpawnRng::new(1);
        for _ in 0..1_000 {
            let v = rng.uniform(-10.0, 10.0);
            assert!((-10.0..=10.0).contains(&v));
        }
    }

    #[test]
    fn degenerate_interval_returns_lo() {
        let mut rng = SpawnRng::new(1);
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
        assert_eq!(rng.uniform(3.0, 1.0), 3.0);
    }
}

#[cfg(test)]
mod stats {
    use crate::stats::{mean, population_std};
    use crate::Summary;

    #[test]
    fn mean_of_values() {
        assert!((mean(&[1.0, 2.0, 3.0, 4.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn population_not_sample_std() {
        // Population std of [2,4,4,4,5,5,7,9] is exactly 2 (sample std ≈ 2.138).
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std(&v) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn single_value_has_zero_spread() {
        let s = Summary::of(&[0.6]);
        assert_eq!(s.mean, 0.6);
        assert_eq!(s.std, 0.0);
    }

    #[test]
    fn empty_is_nan() {
        let s = Summary::of(&[]);
        assert!(s.mean.is_nan());
        assert!(s.std.is_nan());
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, ProbeConfig, TrialConfig};

    #[test]
    fn defaults_match_reference_protocol() {
        let p = ProbeConfig::default();
        assert_eq!(p.duration_secs, 4.0);
        assert_eq!(p.velocity, 1.5);
        assert_eq!(p.lag_secs, 0.5);
        assert_eq!(p.expected_distance(), 6.0);
        assert!(TrialConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_velocity_is_a_precondition_violation() {
        let p = ProbeConfig { velocity: 0.0, ..ProbeConfig::default() };
        assert!(matches!(p.validate(), Err(CoreError::Precondition(_))));
    }

    #[test]
    fn negative_velocity_is_a_precondition_violation() {
        let p = ProbeConfig { velocity: -1.5, ..ProbeConfig::default() };
        assert!(matches!(p.validate(), Err(CoreError::Precondition(_))));
        let t = TrialConfig { probe: p, ..TrialConfig::default() };
        assert!(t.validate().is_err());
    }

    #[test]
    fn non_finite_velocity_is_a_precondition_violation() {
        let p = ProbeConfig { velocity: f64::NAN, ..ProbeConfig::default() };
        assert!(matches!(p.validate(), Err(CoreError::Precondition(_))));
    }

    #[test]
    fn zero_duration_is_a_precondition_violation() {
        let p = ProbeConfig { duration_secs: 0.0, ..ProbeConfig::default() };
        assert!(matches!(p.validate(), Err(CoreError::Precondition(_))));
    }

    #[test]
    fn negative_lag_rejected() {
        let p = ProbeConfig { lag_secs: -0.1, ..ProbeConfig::default() };
        assert!(matches!(p.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_repeats_rejected() {
        let t = TrialConfig { repeats: 0, ..TrialConfig::default() };
        assert!(t.validate().is_err());
    }
}

#[cfg(test)]
mod record {
    use crate::record::{COL_AGENTS, COL_REL_STD, COLUMN_COUNT};
    use crate::{CoreError, ResultMatrix, TrialRecord};

    fn sample(agents: u32) -> TrialRecord {
        TrialRecord {
            agents,
            face_south:    false,
            duration_secs: 4.0,
            lag_secs:      0.5,
            velocity:      1.5,
            repeats:       5,
            abs_mean:      0.6,
            abs_std:       0.05,
            rel_mean:      0.1,
            rel_std:       0.01,
        }
    }

    #[test]
    fn row_layout_is_positional() {
        let row = sample(12).to_row();
        assert_eq!(row, [12.0, 0.0, 4.0, 0.5, 1.5, 5.0, 0.6, 0.05, 0.1, 0.01]);
    }

    #[test]
    fn from_row_rebuilds_record() {
        let rec = sample(3);
        assert_eq!(TrialRecord::from_row(&rec.to_row()).unwrap(), rec);
    }

    #[test]
    fn wrong_column_count_is_schema_error() {
        let err = TrialRecord::from_row(&[1.0, 0.0, 4.0]).unwrap_err();
        assert!(matches!(err, CoreError::Schema(_)));
    }

    #[test]
    fn fractional_agent_count_rejected() {
        let mut row = sample(1).to_row();
        row[COL_AGENTS] = 2.5;
        assert!(TrialRecord::from_row(&row).is_err());
    }

    #[test]
    fn bad_flag_rejected() {
        let mut row = sample(1).to_row();
        row[1] = 4.0;
        assert!(TrialRecord::from_row(&row).is_err());
    }

    #[test]
    fn matrix_column_access() {
        let m: ResultMatrix = (1..=3).map(sample).collect();
        assert_eq!(m.len(), 3);
        assert_eq!(m.column(COL_AGENTS), vec![1.0, 2.0, 3.0]);
        assert_eq!(m.column(COL_REL_STD), vec![0.01; 3]);
    }

    #[test]
    #[should_panic]
    fn column_out_of_range_panics() {
        ResultMatrix::default().column(COLUMN_COUNT);
    }
}

//! Unit tests for sd-analysis.

#[cfg(test)]
fn record(agents: u32, abs_mean: f64, rel_mean: f64, rel_std: f64) -> sd_core::TrialRecord {
    sd_core::TrialRecord {
        rel_mean,
        rel_std,
        ..timed_record(agents, 4.0, 1.5, abs_mean)
    }
}

#[cfg(test)]
fn timed_record(agents: u32, duration_secs: f64, velocity: f64, abs_mean: f64) -> sd_core::TrialRecord {
    sd_core::TrialRecord {
        agents,
        face_south: false,
        duration_secs,
        lag_secs: 0.5,
        velocity,
        repeats: 5,
        abs_mean,
        abs_std: 0.0,
        rel_mean: abs_mean / (duration_secs * velocity),
        rel_std: 0.0,
    }
}

#[cfg(test)]
fn dataset(file: &str, label: &str, secondary_agents: u32, agents: &[u32]) -> crate::Dataset {
    crate::Dataset {
        file: file.into(),
        label: label.into(),
        secondary_agents,
        matrix: agents.iter().map(|&n| record(n, 0.6, 0.1, 0.02)).collect(),
    }
}

#[cfg(test)]
mod cost_tests {
    use sd_core::ResultMatrix;

    use super::{record, timed_record};
    use crate::{CostBreakdown, derive_cost, singularities};

    #[test]
    fn worked_example() {
        let b = CostBreakdown::of(&record(1, 0.6, 0.1, 0.0));
        assert!((b.expected_distance - 6.0).abs() < 1e-12);
        assert!((b.measured_distance - 5.4).abs() < 1e-12);
        assert!((b.sim_secs - 3.6).abs() < 1e-12);
        assert!((b.real_per_sim - 4.0 / 3.6).abs() < 1e-12);
    }

    #[test]
    fn simulated_time_recovered_across_durations_and_velocities() {
        // (real seconds, velocity, simulated seconds actually covered)
        let cases = [(4.0, 1.5, 3.6), (2.0, 0.5, 1.0), (10.0, 3.0, 2.5), (1.0, 2.0, 1.0), (0.5, 7.0, 0.125)];
        for (t, v, t_sim) in cases {
            let shortfall = t * v - t_sim * v;
            let b = CostBreakdown::of(&timed_record(1, t, v, shortfall));
            assert!((b.expected_distance - t * v).abs() < 1e-9, "t={t} v={v}");
            assert!((b.sim_secs - t_sim).abs() < 1e-9, "t={t} v={v} sim={}", b.sim_secs);
            assert!((b.real_per_sim - t / t_sim).abs() < 1e-9, "t={t} v={v} cost={}", b.real_per_sim);
        }
    }

    #[test]
    fn no_shortfall_costs_one() {
        let m = ResultMatrix::new(vec![record(1, 0.0, 0.0, 0.0)]);
        assert_eq!(derive_cost(&m), vec![1.0]);
    }

    #[test]
    fn cost_recovers_injected_slowdown() {
        // A simulator running at factor k covers d_exp / k.
        for k in [1.0, 1.5, 2.0, 4.0] {
            let d_exp = 6.0;
            let m = ResultMatrix::new(vec![record(1, d_exp - d_exp / k, 0.0, 0.0)]);
            let cost = derive_cost(&m)[0];
            assert!((cost - k).abs() < 1e-9, "k={k} cost={cost}");
        }
    }

    #[test]
    fn one_value_per_row() {
        let m: ResultMatrix = (1..=4).map(|n| record(n, 0.6, 0.1, 0.0)).collect();
        assert_eq!(derive_cost(&m).len(), 4);
    }

    #[test]
    fn stationary_agent_is_singular() {
        let m = ResultMatrix::new(vec![record(1, 0.6, 0.1, 0.0), record(50, 6.0, 1.0, 0.0)]);
        let costs = derive_cost(&m);
        assert!(costs[1].is_infinite());

        let s = singularities(&m, &costs);
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].row, 1);
        assert_eq!(s[0].agents, 50);
    }

    #[test]
    fn nan_shortfall_is_singular() {
        let m = ResultMatrix::new(vec![record(1, f64::NAN, f64::NAN, f64::NAN)]);
        let costs = derive_cost(&m);
        assert!(costs[0].is_nan());
        assert_eq!(singularities(&m, &costs).len(), 1);
    }
}

#[cfg(test)]
mod dataset_tests {
    use sd_output::ManifestEntry;

    use super::dataset;
    use crate::{AnalysisError, DatasetSet, load_datasets};

    #[test]
    fn display_label_mentions_casus_only_when_present() {
        assert_eq!(dataset("a.csv", "sync", 0, &[1]).display_label(), "sync");
        assert_eq!(dataset("b.csv", "sync", 5, &[1]).display_label(), "sync, 5 casus");
    }

    #[test]
    fn x_values_fold_secondary_count() {
        let d = dataset("a.csv", "sync", 5, &[1, 6, 11]);
        assert_eq!(d.x_values(false), vec![1.0, 6.0, 11.0]);
        assert_eq!(d.x_values(true), vec![6.0, 11.0, 16.0]);
    }

    #[test]
    fn reinsert_replaces_in_place() {
        let mut set = DatasetSet::new();
        set.insert(dataset("a.csv", "first", 0, &[1]));
        set.insert(dataset("b.csv", "second", 0, &[1]));
        let old = set.insert(dataset("a.csv", "again", 0, &[1, 2]));

        assert_eq!(old.map(|d| d.label), Some("first".to_owned()));
        let labels: Vec<_> = set.iter().map(|d| d.label.as_str()).collect();
        assert_eq!(labels, ["again", "second"]);
        assert_eq!(set.get("a.csv").map(|d| d.matrix.len()), Some(2));
    }

    #[test]
    fn load_from_manifest_entries() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.csv"), "1,0,4,0.5,1.5,5,0.6,0,0.1,0\n").unwrap();
        std::fs::write(dir.path().join("b.csv"), "1,0,4,0.5,1.5,5,0.6,0,0.1,0\n6,0,4,0.5,1.5,5,0.9,0,0.15,0\n").unwrap();
        let entries = vec![
            ManifestEntry { file: "a.csv".into(), label: "a".into(), secondary_agents: 0 },
            ManifestEntry { file: "b.csv".into(), label: "b".into(), secondary_agents: 5 },
        ];

        let set = load_datasets(entries, dir.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("b.csv").unwrap().matrix.len(), 2);
        assert_eq!(set.get("b.csv").unwrap().secondary_agents, 5);
    }

    #[test]
    fn missing_file_names_the_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let entries = vec![ManifestEntry { file: "gone.csv".into(), label: "x".into(), secondary_agents: 0 }];
        match load_datasets(entries, dir.path()) {
            Err(AnalysisError::Dataset { file, .. }) => assert_eq!(file, "gone.csv"),
            other => panic!("unexpected {other:?}"),
        }
    }
}

#[cfg(test)]
mod compare_tests {
    use super::{dataset, record};
    use crate::compare::{X_LABEL_FOLDED, X_LABEL_PRIMARY};
    use crate::{Dataset, DatasetSet, Palette, compare};

    fn two_sets() -> DatasetSet {
        [dataset("a.csv", "sync", 0, &[1, 11, 21]), dataset("b.csv", "sync", 5, &[2, 12, 22])]
            .into_iter()
            .collect()
    }

    #[test]
    fn unfolded_x_is_primary_count() {
        let cmp = compare(&two_sets(), false);
        assert_eq!(cmp.x_label, X_LABEL_PRIMARY);
        let xs: Vec<Vec<f64>> = cmp
            .relative_error
            .iter()
            .map(|s| s.points.iter().map(|p| p.0).collect())
            .collect();
        assert_eq!(xs, [vec![1.0, 11.0, 21.0], vec![2.0, 12.0, 22.0]]);
    }

    #[test]
    fn folded_x_shifts_by_secondary_count() {
        let cmp = compare(&two_sets(), true);
        assert_eq!(cmp.x_label, X_LABEL_FOLDED);
        let first: Vec<f64> = cmp.relative_error[0].points.iter().map(|p| p.0).collect();
        let second: Vec<f64> = cmp.relative_error[1].points.iter().map(|p| p.0).collect();
        assert_eq!(first, [1.0, 11.0, 21.0]);
        assert_eq!(second, [7.0, 17.0, 27.0]);
        assert_eq!(cmp.cost[1].points[0].0, 7.0);
    }

    #[test]
    fn band_is_mean_plus_minus_std() {
        let cmp = compare(&two_sets(), false);
        let s = &cmp.relative_error[0];
        let (lo, hi) = s.band.as_ref().unwrap()[0];
        assert!((lo - 0.08).abs() < 1e-12);
        assert!((hi - 0.12).abs() < 1e-12);
        assert!(cmp.cost[0].band.is_none());
    }

    #[test]
    fn colours_cycle_through_palette() {
        let set: DatasetSet = (0..9).map(|i| dataset(&format!("{i}.csv"), "d", 0, &[1])).collect();
        let cmp = compare(&set, false);
        let colors: Vec<_> = cmp.relative_error.iter().map(|s| s.color).collect();
        assert_eq!(colors[0], "blue");
        assert_eq!(colors[1], "red");
        assert_eq!(colors[7], colors[0]);
        assert_eq!(colors[8], colors[1]);
        assert_eq!(Palette::DEFAULT.color_for(6), "yellow");
    }

    #[test]
    fn singular_rows_reported_and_kept() {
        let mut d: Dataset = dataset("a.csv", "sync", 0, &[]);
        d.matrix = vec![record(1, 0.6, 0.1, 0.0), record(80, 6.0, 1.0, 0.0)].into_iter().collect();
        let set: DatasetSet = std::iter::once(d).collect();

        let cmp = compare(&set, false);
        assert_eq!(cmp.cost[0].points.len(), 2);
        assert_eq!(cmp.cost[0].finite_points().count(), 1);
        assert_eq!(cmp.singularities.len(), 1);
        assert_eq!(cmp.singularities[0].1.agents, 80);
    }

    #[test]
    fn export_rows_follow_series_order() {
        let cmp = compare(&two_sets(), true);
        let band = cmp.band_rows();
        let cost = cmp.cost_rows();
        assert_eq!(band.len(), 6);
        assert_eq!(cost.len(), 6);
        assert_eq!(band[3].label, "sync, 5 casus");
        assert_eq!(band[3].color, "red");
        assert_eq!(band[3].x, 7.0);
        assert!((cost[0].real_per_sim - 4.0 / 3.6).abs() < 1e-12);
    }

    #[test]
    fn empty_set_compares_to_nothing() {
        let cmp = compare(&DatasetSet::new(), false);
        assert!(cmp.relative_error.is_empty());
        assert!(cmp.cost.is_empty());
    }
}

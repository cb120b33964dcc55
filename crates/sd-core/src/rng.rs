//! Seeded RNG for spawn layouts.
//!
//! Distractor agents are scattered with uniform jitter on position and
//! heading.  Seeding makes a sweep's layout reproducible, so two runs with
//! the same seed load the simulator with the same geometry.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG used when placing spawned entities.
///
/// Used only in the single-threaded setup phase of a run.
pub struct SpawnRng(SmallRng);

impl SpawnRng {
    pub fn new(seed: u64) -> Self {
        SpawnRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy, for runs that don't ask for reproducibility.
    pub fn from_entropy() -> Self {
        SpawnRng(SmallRng::from_entropy())
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform sample in the closed interval `[lo, hi]`.
    ///
    /// Returns `lo` when the interval is empty or degenerate.
    #[inline]
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        if hi > lo {
            self.0.gen_range(lo..=hi)
        } else {
            lo
        }
    }
}

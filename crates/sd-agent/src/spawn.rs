//! Spawn layouts for loading the simulator.
//!
//! # Layout
//!
//! | Entity              | Name        | Placement                                              |
//! |---------------------|-------------|--------------------------------------------------------|
//! | focal bee           | `bee-000`   | the trial home pose                                    |
//! | distractor bees     | `bee-001..` | x ~ U(-10, 10), y = -2, yaw = 90° ± U(-10°, 10°)        |
//! | CASUs               | `casu-bNN`  | evenly spaced on a ring of radius `r` around the origin |
//!
//! Distractors face north by default, across the focal bee's path, so the
//! focal bee can trigger their sensors.  South-facing distractors (yaw
//! + 180°) look away from it.
//!
//! A sweep can only add entities: there is no despawn, so [`Population`]
//! tracks what has been spawned and only ever spawns the difference.

use std::f64::consts::PI;

use sd_core::{EntityKind, Pose, SpawnRng};

use crate::{AgentError, AgentResult, WorldControl};

/// Default radius of the CASU ring.
pub const DEFAULT_CASU_RADIUS: f64 = 25.0;

/// Pose for one distractor bee.
pub fn distractor_pose(rng: &mut SpawnRng, face_south: bool) -> Pose {
    let mut yaw_deg = 90.0 + rng.uniform(-10.0, 10.0);
    if face_south {
        yaw_deg += 180.0;
    }
    let x = rng.uniform(-10.0, 10.0);
    Pose::new(x, -2.0, yaw_deg * PI / 180.0)
}

/// Poses of `n` CASUs evenly spaced on a ring of `radius`.
///
/// Unit `i` sits at angle `θ = 360° · i / n` measured clockwise from +y,
/// i.e. at `(r sin θ, r cos θ)`, with yaw `270° - θ`.
pub fn casu_ring_poses(n: usize, radius: f64) -> Vec<Pose> {
    (0..n)
        .map(|i| {
            let theta = (360.0 * i as f64 / n as f64).to_radians();
            let yaw = (180.0_f64 + 90.0).to_radians() - theta;
            Pose::new(radius * theta.sin(), radius * theta.cos(), yaw)
        })
        .collect()
}

/// Spawn the focal bee `bee-000` at `home`.
pub fn spawn_focal<W: WorldControl>(world: &mut W, home: Pose) -> AgentResult<String> {
    let name = EntityKind::Bee.name(0);
    world.spawn(EntityKind::Bee, &name, home)?;
    Ok(name)
}

/// Spawn distractor bees with indices `first..end`.
pub fn spawn_distractors<W: WorldControl>(
    world:      &mut W,
    rng:        &mut SpawnRng,
    first:      usize,
    end:        usize,
    face_south: bool,
) -> AgentResult<Vec<String>> {
    let mut names = Vec::with_capacity(end.saturating_sub(first));
    for i in first..end {
        let name = EntityKind::Bee.name(i);
        world.spawn(EntityKind::Bee, &name, distractor_pose(rng, face_south))?;
        names.push(name);
    }
    Ok(names)
}

/// Spawn `n` CASUs on a ring of `radius`.
pub fn spawn_casu_ring<W: WorldControl>(
    world:  &mut W,
    n:      usize,
    radius: f64,
) -> AgentResult<Vec<String>> {
    casu_ring_poses(n, radius)
        .into_iter()
        .enumerate()
        .map(|(i, pose)| {
            let name = EntityKind::Casu.name(i);
            world.spawn(EntityKind::Casu, &name, pose)?;
            Ok(name)
        })
        .collect()
}

// ── Population ────────────────────────────────────────────────────────────────

/// Tracks what a sweep has spawned so far.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Population {
    /// Bees in the world, including the focal bee.
    pub bees:  usize,
    pub casus: usize,
}

impl Population {
    /// Account for entities that already exist (e.g. spawned by whoever
    /// launched the simulator).
    pub fn existing(bees: usize, casus: usize) -> Self {
        Self { bees, casus }
    }

    /// Spawn the focal bee if the world has no bees yet.
    pub fn ensure_focal<W: WorldControl>(&mut self, world: &mut W, home: Pose) -> AgentResult<()> {
        if self.bees == 0 {
            spawn_focal(world, home)?;
            self.bees = 1;
        }
        Ok(())
    }

    /// Grow the bee population to `target`, spawning distractors only.
    ///
    /// The focal bee must already exist.
    pub fn grow_bees_to<W: WorldControl>(
        &mut self,
        world:      &mut W,
        rng:        &mut SpawnRng,
        target:     usize,
        face_south: bool,
    ) -> AgentResult<()> {
        if self.bees == 0 {
            return Err(AgentError::Layout("focal bee must be spawned before distractors".into()));
        }
        if target < self.bees {
            return Err(AgentError::Shrink {
                what:      "bee",
                current:   self.bees,
                requested: target,
            });
        }
        spawn_distractors(world, rng, self.bees, target, face_south)?;
        self.bees = target;
        Ok(())
    }

    /// Spawn the CASU ring.  Only allowed once, from an empty CASU
    /// population, because ring positions depend on the total count.
    pub fn spawn_casus<W: WorldControl>(
        &mut self,
        world:  &mut W,
        n:      usize,
        radius: f64,
    ) -> AgentResult<()> {
        if n == self.casus {
            return Ok(());
        }
        if self.casus != 0 {
            return Err(AgentError::Layout(format!(
                "CASU ring already holds {} units, cannot re-lay it out for {n}",
                self.casus
            )));
        }
        spawn_casu_ring(world, n, radius)?;
        self.casus = n;
        Ok(())
    }
}

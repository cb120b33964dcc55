//! In-memory kinematic world.
//!
//! # Model
//!
//! Every entity is a differential-drive body.  Wheel commands ramp linearly
//! from the speeds in effect at command time to the new target over
//! `ramp_secs` of simulated time, then hold.  Forward speed is the mean of
//! the two wheels; yaw rate is their difference over `axle_width`.
//!
//! Clock time is converted to simulated time on every call:
//!
//! ```text
//! slowdown = base_slowdown + per_entity_slowdown * entity_count
//! sim_dt   = real_dt / slowdown
//! ```
//!
//! so a busier world advances less simulated time per real second, which is
//! exactly the effect the measurement pipeline is built to recover.
//!
//! The world is single-threaded (`Rc<RefCell<_>>`).  Agent handles share
//! the world state with the [`KinematicWorld`] they came from.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use sd_core::{Clock, EntityKind, Pose};

use crate::{AgentControl, AgentError, AgentResult, Indicator, WorldControl};

/// Largest integration step, in simulated seconds, while the body turns.
const MAX_TURN_STEP: f64 = 0.01;

/// Ramp remainders below this are rounded up to "ramp complete".
const RAMP_EPSILON: f64 = 1e-12;

// ── KinematicParams ───────────────────────────────────────────────────────────

/// Tuning of the emulated simulator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KinematicParams {
    /// Real seconds per simulated second with no entities.
    pub base_slowdown: f64,
    /// Extra real seconds per simulated second for every spawned entity.
    pub per_entity_slowdown: f64,
    /// Simulated seconds for a wheel command to reach its target speed.
    pub ramp_secs: f64,
    /// Distance between the wheels.
    pub axle_width: f64,
}

impl Default for KinematicParams {
    fn default() -> Self {
        Self {
            base_slowdown:       1.0,
            per_entity_slowdown: 0.0,
            ramp_secs:           0.0,
            axle_width:          0.4,
        }
    }
}

impl KinematicParams {
    /// Real seconds per simulated second for a world holding `entities`
    /// entities.  Never below `f64::EPSILON`.
    pub fn slowdown(&self, entities: usize) -> f64 {
        (self.base_slowdown + self.per_entity_slowdown * entities as f64).max(f64::EPSILON)
    }
}

// ── Body ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
struct Body {
    kind:      EntityKind,
    pose:      Pose,
    indicator: Indicator,
    /// Wheel speeds in effect when the last command was issued.
    from:      (f64, f64),
    target:    (f64, f64),
    /// Simulated seconds since the last command.
    since_cmd: f64,
}

impl Body {
    fn new(kind: EntityKind, pose: Pose) -> Self {
        Self {
            kind,
            pose,
            indicator: Indicator::IDLE,
            from:      (0.0, 0.0),
            target:    (0.0, 0.0),
            since_cmd: 0.0,
        }
    }

    fn wheel_speeds(&self, ramp_secs: f64) -> (f64, f64) {
        let frac = if ramp_secs <= 0.0 {
            1.0
        } else {
            (self.since_cmd / ramp_secs).min(1.0)
        };
        (
            self.from.0 + (self.target.0 - self.from.0) * frac,
            self.from.1 + (self.target.1 - self.from.1) * frac,
        )
    }

    fn command(&mut self, left: f64, right: f64, ramp_secs: f64) {
        self.from = self.wheel_speeds(ramp_secs);
        self.target = (left, right);
        self.since_cmd = 0.0;
    }

    /// Integrate `dt` simulated seconds.  Steps never straddle the end of a
    /// ramp, so speeds are linear within each step and straight-line motion
    /// is integrated exactly.
    fn advance(&mut self, dt: f64, params: &KinematicParams) {
        if self.from == (0.0, 0.0) && self.target == (0.0, 0.0) {
            self.since_cmd += dt;
            return;
        }

        let ramp = params.ramp_secs;
        let mut remaining = dt;
        while remaining > 0.0 {
            let mut h = remaining;
            if ramp > 0.0 && self.since_cmd < ramp {
                let left = ramp - self.since_cmd;
                if left > RAMP_EPSILON {
                    h = h.min(left);
                } else {
                    self.since_cmd = ramp;
                }
            }

            let (l0, r0) = self.wheel_speeds(ramp);
            let turning = l0 != r0 || self.target.0 != self.target.1;
            if turning {
                h = h.min(MAX_TURN_STEP);
            }
            self.since_cmd += h;
            let (l1, r1) = self.wheel_speeds(ramp);

            let v = (l0 + r0 + l1 + r1) / 4.0;
            let w0 = (r0 - l0) / params.axle_width;
            let w1 = (r1 - l1) / params.axle_width;
            let yaw_mid = self.pose.yaw + h * (3.0 * w0 + w1) / 8.0;

            self.pose.x += v * h * yaw_mid.cos();
            self.pose.y += v * h * yaw_mid.sin();
            self.pose.yaw += h * (w0 + w1) / 2.0;
            remaining -= h;
        }
    }
}

// ── World state ───────────────────────────────────────────────────────────────

struct WorldState<C: Clock> {
    clock:     C,
    params:    KinematicParams,
    bodies:    HashMap<String, Body>,
    sim_secs:  f64,
    last_real: f64,
    connected: bool,
}

impl<C: Clock> WorldState<C> {
    fn check(&self) -> AgentResult<()> {
        if self.connected {
            Ok(())
        } else {
            Err(AgentError::Unavailable("kinematic world disconnected".into()))
        }
    }

    /// Bring simulated time up to the clock.
    fn sync(&mut self) {
        let now = self.clock.now_secs();
        let dt_real = now - self.last_real;
        if dt_real <= 0.0 {
            return;
        }
        self.last_real = now;

        let dt_sim = dt_real / self.params.slowdown(self.bodies.len());
        self.sim_secs += dt_sim;
        let params = self.params;
        for body in self.bodies.values_mut() {
            body.advance(dt_sim, &params);
        }
    }

    fn body_mut(&mut self, name: &str) -> AgentResult<&mut Body> {
        self.bodies
            .get_mut(name)
            .ok_or_else(|| AgentError::UnknownEntity(name.to_owned()))
    }
}

// ── KinematicWorld ────────────────────────────────────────────────────────────

/// In-memory stand-in for the remote simulator.
pub struct KinematicWorld<C: Clock> {
    state: Rc<RefCell<WorldState<C>>>,
}

impl<C: Clock> Clone for KinematicWorld<C> {
    fn clone(&self) -> Self {
        Self { state: Rc::clone(&self.state) }
    }
}

impl<C: Clock> KinematicWorld<C> {
    pub fn new(clock: C, params: KinematicParams) -> Self {
        let last_real = clock.now_secs();
        Self {
            state: Rc::new(RefCell::new(WorldState {
                clock,
                params,
                bodies: HashMap::new(),
                sim_secs: 0.0,
                last_real,
                connected: true,
            })),
        }
    }

    /// Handle for driving the mobile entity `name`.
    pub fn agent(&self, name: &str) -> AgentResult<KinematicAgent<C>> {
        let s = self.state.borrow();
        s.check()?;
        let body = s
            .bodies
            .get(name)
            .ok_or_else(|| AgentError::UnknownEntity(name.to_owned()))?;
        if !body.kind.is_mobile() {
            return Err(AgentError::NotMobile(name.to_owned()));
        }
        Ok(KinematicAgent {
            name:  name.to_owned(),
            state: Rc::clone(&self.state),
        })
    }

    /// Simulate a lost connection: every later call fails with
    /// [`AgentError::Unavailable`].
    pub fn disconnect(&self) {
        self.state.borrow_mut().connected = false;
    }

    /// Simulated seconds elapsed since the world was created.
    pub fn sim_secs(&self) -> f64 {
        let mut s = self.state.borrow_mut();
        s.sync();
        s.sim_secs
    }

    pub fn entity_count(&self) -> usize {
        self.state.borrow().bodies.len()
    }

    pub fn count_of(&self, kind: EntityKind) -> usize {
        self.state.borrow().bodies.values().filter(|b| b.kind == kind).count()
    }

    /// Current real-per-simulated-second ratio.
    pub fn slowdown(&self) -> f64 {
        let s = self.state.borrow();
        s.params.slowdown(s.bodies.len())
    }

    /// Ground-truth pose of any entity, without going through a handle.
    pub fn pose_of(&self, name: &str) -> Option<Pose> {
        let mut s = self.state.borrow_mut();
        s.sync();
        s.bodies.get(name).map(|b| b.pose)
    }

    pub fn indicator_of(&self, name: &str) -> Option<Indicator> {
        self.state.borrow().bodies.get(name).map(|b| b.indicator)
    }
}

impl<C: Clock> WorldControl for KinematicWorld<C> {
    fn spawn(&mut self, kind: EntityKind, name: &str, pose: Pose) -> AgentResult<()> {
        let mut s = self.state.borrow_mut();
        s.check()?;
        if s.bodies.contains_key(name) {
            return Err(AgentError::AlreadyExists(name.to_owned()));
        }
        // Time before the spawn runs at the old load.
        s.sync();
        s.bodies.insert(name.to_owned(), Body::new(kind, pose));
        tracing::debug!(%kind, name, %pose, entities = s.bodies.len(), "spawned");
        Ok(())
    }
}

// ── KinematicAgent ────────────────────────────────────────────────────────────

/// Handle on one mobile entity of a [`KinematicWorld`].
pub struct KinematicAgent<C: Clock> {
    name:  String,
    state: Rc<RefCell<WorldState<C>>>,
}

impl<C: Clock> KinematicAgent<C> {
    fn with_body<T>(&mut self, f: impl FnOnce(&mut Body, &KinematicParams) -> T) -> AgentResult<T> {
        let mut s = self.state.borrow_mut();
        s.check()?;
        s.sync();
        let params = s.params;
        let body = s.body_mut(&self.name)?;
        Ok(f(body, &params))
    }
}

impl<C: Clock> AgentControl for KinematicAgent<C> {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_velocity(&mut self, left: f64, right: f64) -> AgentResult<()> {
        self.with_body(|b, p| b.command(left, right, p.ramp_secs))
    }

    fn set_indicator(&mut self, color: Indicator) -> AgentResult<()> {
        self.with_body(|b, _| b.indicator = color)
    }

    fn get_true_pose(&mut self) -> AgentResult<Pose> {
        self.with_body(|b, _| b.pose)
    }

    fn teleport(&mut self, target: Pose) -> AgentResult<()> {
        self.with_body(|b, _| b.pose = target)
    }
}

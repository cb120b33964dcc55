//! Capability traits: the only way the core touches the simulator.

use sd_core::{EntityKind, Pose};

use crate::{AgentResult, Indicator};

/// A single remotely controlled agent.
///
/// Every method is a blocking call on the simulator.  Implementations report
/// transport problems as [`AgentError::Unavailable`][crate::AgentError::Unavailable];
/// callers treat that as fatal.
///
/// # Example
///
/// ```rust,ignore
/// fn nudge<A: AgentControl>(agent: &mut A) -> AgentResult<Pose> {
///     agent.drive_forward(1.0)?;
///     clock.sleep_secs(0.5);
///     agent.stop()?;
///     agent.get_true_pose()
/// }
/// ```
pub trait AgentControl {
    /// The agent's name in the simulated world.
    fn name(&self) -> &str;

    /// Command left and right wheel speeds.
    fn set_velocity(&mut self, left: f64, right: f64) -> AgentResult<()>;

    /// Set the agent's indicator colour.
    fn set_indicator(&mut self, color: Indicator) -> AgentResult<()>;

    /// Ground-truth pose as known to the simulator.
    fn get_true_pose(&mut self) -> AgentResult<Pose>;

    /// Move the agent instantly to `target`.
    fn teleport(&mut self, target: Pose) -> AgentResult<()>;

    /// Zero velocity and neutral indicator.
    fn stop(&mut self) -> AgentResult<()> {
        self.set_indicator(Indicator::IDLE)?;
        self.set_velocity(0.0, 0.0)
    }

    /// Straight-line motion at `velocity` with the moving indicator.
    fn drive_forward(&mut self, velocity: f64) -> AgentResult<()> {
        self.set_indicator(Indicator::MOVING)?;
        self.set_velocity(velocity, velocity)
    }
}

impl<A: AgentControl + ?Sized> AgentControl for &mut A {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn set_velocity(&mut self, left: f64, right: f64) -> AgentResult<()> {
        (**self).set_velocity(left, right)
    }

    fn set_indicator(&mut self, color: Indicator) -> AgentResult<()> {
        (**self).set_indicator(color)
    }

    fn get_true_pose(&mut self) -> AgentResult<Pose> {
        (**self).get_true_pose()
    }

    fn teleport(&mut self, target: Pose) -> AgentResult<()> {
        (**self).teleport(target)
    }
}

/// World-level operations of the simulator.
pub trait WorldControl {
    /// Create a new entity.  Names are unique; spawning an existing name
    /// fails with [`AgentError::AlreadyExists`][crate::AgentError::AlreadyExists].
    fn spawn(&mut self, kind: EntityKind, name: &str, pose: Pose) -> AgentResult<()>;
}

impl<W: WorldControl + ?Sized> WorldControl for &mut W {
    fn spawn(&mut self, kind: EntityKind, name: &str, pose: Pose) -> AgentResult<()> {
        (**self).spawn(kind, name, pose)
    }
}

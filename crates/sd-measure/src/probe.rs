//! Motion probe: drive one agent for a fixed time and sample its pose.

use sd_agent::{AgentControl, AgentResult};
use sd_core::{Clock, Pose, ProbeConfig};

/// Sample the agent's pose across `cfg.duration_secs` of forward motion,
/// after skipping `cfg.lag_secs` of acceleration.
///
/// Protocol: stop → drive forward → wait lag → sample → wait duration →
/// sample → stop.  The agent's velocity and indicator are left in the
/// stopped state.  Any failed call aborts the probe; nothing is retried.
pub fn probe<A, C>(agent: &mut A, clock: &C, cfg: &ProbeConfig) -> AgentResult<(Pose, Pose)>
where
    A: AgentControl + ?Sized,
    C: Clock + ?Sized,
{
    agent.stop()?;
    agent.drive_forward(cfg.velocity)?;
    clock.sleep_secs(cfg.lag_secs);
    let before = agent.get_true_pose()?;
    clock.sleep_secs(cfg.duration_secs);
    let after = agent.get_true_pose()?;
    agent.stop()?;
    Ok((before, after))
}

/// Like [`probe`] but samples from standstill, with no lag: stop → sample →
/// drive for the duration → stop → sample.
///
/// The acceleration ramp falls inside the sampled window, so the measured
/// displacement is biased low.  Useful for sizing the lag.
pub fn probe_from_rest<A, C>(agent: &mut A, clock: &C, cfg: &ProbeConfig) -> AgentResult<(Pose, Pose)>
where
    A: AgentControl + ?Sized,
    C: Clock + ?Sized,
{
    agent.stop()?;
    let before = agent.get_true_pose()?;
    agent.drive_forward(cfg.velocity)?;
    clock.sleep_secs(cfg.duration_secs);
    agent.stop()?;
    let after = agent.get_true_pose()?;
    Ok((before, after))
}

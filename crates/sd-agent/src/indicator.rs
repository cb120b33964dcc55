//! Indicator colours shown by an agent.

/// RGB colour with channels in `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Indicator {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Indicator {
    /// Neutral grey: the agent is stopped.
    pub const IDLE: Indicator = Indicator { r: 0.75, g: 0.75, b: 0.75 };

    /// Yellow: the agent is under commanded motion.
    pub const MOVING: Indicator = Indicator { r: 1.0, g: 1.0, b: 0.0 };
}

impl Default for Indicator {
    fn default() -> Self {
        Self::IDLE
    }
}

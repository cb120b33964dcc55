//! Planar pose type.
//!
//! A `Pose` is what the simulator reports for an agent: a 2D position plus
//! heading.  No timestamp travels with it; the caller controls elapsed time
//! through explicit waits, so two poses only mean something relative to the
//! waits issued between sampling them.

use std::fmt;

/// A 2D position `(x, y)` in world units plus heading `yaw` in radians.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose {
    pub x:   f64,
    pub y:   f64,
    pub yaw: f64,
}

impl Pose {
    pub const ORIGIN: Pose = Pose { x: 0.0, y: 0.0, yaw: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    /// Euclidean distance between the two positions.  Heading is ignored.
    ///
    /// Always `>= 0`.
    #[inline]
    pub fn distance_to(self, other: Pose) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Heading in degrees, for display.
    #[inline]
    pub fn yaw_degrees(self) -> f64 {
        self.yaw.to_degrees()
    }
}

impl From<(f64, f64, f64)> for Pose {
    #[inline]
    fn from((x, y, yaw): (f64, f64, f64)) -> Self {
        Pose { x, y, yaw }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2} @ {:.1}°)", self.x, self.y, self.yaw_degrees())
    }
}

//! Entity classes that can be spawned into the simulated world.
//!
//! The measurement only ever moves a bee.  CASUs are stationary
//! infrastructure units; they still load the simulator, which is why result
//! datasets carry a secondary agent count for them.

/// The class of an entity in the simulated world.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// Mobile agent (the primary agent class).
    Bee,
    /// Stationary infrastructure unit (the secondary agent class).
    Casu,
}

impl EntityKind {
    /// Type name used by the simulator's spawn request.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Bee  => "Bee",
            EntityKind::Casu => "Casu",
        }
    }

    /// `true` for classes that can be driven by velocity commands.
    #[inline]
    pub fn is_mobile(self) -> bool {
        matches!(self, EntityKind::Bee)
    }

    /// Canonical name of the `index`-th entity of this class:
    /// `bee-007`, `casu-b03`.
    pub fn name(self, index: usize) -> String {
        match self {
            EntityKind::Bee  => format!("bee-{index:03}"),
            EntityKind::Casu => format!("casu-b{index:02}"),
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

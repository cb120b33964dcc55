//! `sd-agent` — the capability surface the measurement core drives.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`control`]    | `AgentControl` and `WorldControl` traits                        |
//! | [`indicator`]  | `Indicator` colour shown by an agent                            |
//! | [`spawn`]      | Spawn layouts (focal bee, distractors, CASU ring), `Population` |
//! | [`kinematic`]  | `KinematicWorld`, an in-memory differential-drive world         |
//! | [`error`]      | `AgentError`, `AgentResult<T>`                                  |
//!
//! # Design notes
//!
//! The simulator is an opaque remote service.  The core only ever talks to
//! it through the two traits in [`control`]; a transport adapter lives
//! outside this workspace and implements them.  Handles are passed
//! explicitly to every operation that needs them, never held in a global.
//!
//! [`KinematicWorld`] implements the same traits in memory.  It maps clock
//! time onto simulated time through a configurable slowdown factor, which
//! lets tests and dry runs exercise the whole measurement pipeline against a
//! known ground truth.

pub mod control;
pub mod error;
pub mod indicator;
pub mod kinematic;
pub mod spawn;


pub use control::{AgentControl, WorldControl};
pub use error::{AgentError, AgentResult};
pub use indicator::Indicator;
pub use kinematic::{KinematicAgent, KinematicParams, KinematicWorld};
pub use spawn::Population;

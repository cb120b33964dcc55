//! `sd-core` — foundational types for the `slowdown` measurement toolkit.
//!
//! This crate is a dependency of every other `sd-*` crate.  It intentionally
//! has no `sd-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`pose`]        | `Pose` (x, y, yaw) and planar distance                    |
//! | [`entity`]      | `EntityKind`, canonical entity names                      |
//! | [`time`]        | `Clock` trait, `WallClock`, `VirtualClock`                |
//! | [`rng`]         | `SpawnRng` for randomised spawn layouts                   |
//! | [`stats`]       | `Summary`, mean and population standard deviation         |
//! | [`config`]      | `ProbeConfig`, `TrialConfig`                              |
//! | [`record`]      | `TrialRecord`, `ResultMatrix`, result-file column schema  |
//! | [`error`]       | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                         |
//! |---------|----------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to poses, configs, and records. |

pub mod config;
pub mod entity;
pub mod error;
pub mod pose;
pub mod record;
pub mod rng;
pub mod stats;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ProbeConfig, TrialConfig};
pub use entity::EntityKind;
pub use error::{CoreError, CoreResult};
pub use pose::Pose;
pub use record::{ResultMatrix, TrialRecord};
pub use rng::SpawnRng;
pub use stats::Summary;
pub use time::{Clock, VirtualClock, WallClock};

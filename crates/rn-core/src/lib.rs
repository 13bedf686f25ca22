//! `rn-core` — foundational types for the `roadnet` simulator.
//!
//! This crate is a dependency of every other `rn-*` crate and has no `rn-*`
//! dependencies itself.
//!
//! # What lives here
//!
//! | Module    | Contents                                                   |
//! |-----------|------------------------------------------------------------|
//! | [`ids`]   | `IntersectionId`, `VehicleId`, `NodeIndex`, `VehicleIndex` |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                            |
//! | [`error`] | `CoreError`, `CoreResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::{IntersectionId, NodeIndex, VehicleId, VehicleIndex};
pub use time::{SimClock, SimConfig, Tick};

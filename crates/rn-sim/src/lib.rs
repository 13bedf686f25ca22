//! `rn-sim` — the time-stepped movement simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 0.. until every vehicle is Arrived or Excluded:
//!   ① Settle   — finished segments hand over to the next one (travel time
//!                looked up in the graph) or the vehicle arrives.
//!   ② Report   — every `report_interval_ticks`, one StatusLine per vehicle.
//!   ③ Advance  — vehicles in transit spend one tick of segment time.
//!   pace (optional wall-clock delay), clock.advance()
//! ```
//!
//! Vehicles are routed once, when the simulation is built.  A vehicle whose
//! route fails is excluded up front and reported as unroutable; a vehicle
//! whose start equals its end arrives on tick 0.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Settles and advances journeys on Rayon's thread pool.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rn_core::SimConfig;
//! use rn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimConfig::default(), &graph)
//!     .vehicles(&registry)
//!     .build()?;
//! let summary = sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod journey;
pub mod observer;
pub mod pacer;
pub mod sim;
pub mod state;
pub mod status;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use journey::{Journey, Plan};
pub use observer::{NoopObserver, SimObserver};
pub use pacer::{FixedDelay, NoDelay, TickPacer};
pub use sim::{Sim, SimSummary};
pub use state::{MovementState, Phase};
pub use status::{StatusLine, VehicleStatus};

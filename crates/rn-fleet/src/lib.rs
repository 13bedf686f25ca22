//! `rn-fleet` — the vehicles taking part in a simulation run.
//!
//! | Module       | Contents                                        |
//! |--------------|-------------------------------------------------|
//! | [`vehicle`]  | `Vehicle` (id, start, end)                      |
//! | [`registry`] | `VehicleRegistry`                               |
//! | [`loader`]   | `load_vehicles_csv`, `load_vehicles_reader`     |
//! | [`error`]    | `FleetError`, `FleetResult<T>`                  |

pub mod error;
pub mod loader;
pub mod registry;
pub mod vehicle;


pub use error::{FleetError, FleetResult};
pub use loader::{load_vehicles_csv, load_vehicles_reader};
pub use registry::VehicleRegistry;
pub use vehicle::Vehicle;

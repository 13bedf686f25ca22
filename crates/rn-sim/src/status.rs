//! Borrowed per-vehicle status snapshots handed to observers.

use rn_core::{IntersectionId, Tick, VehicleId};
use rn_graph::GraphError;

/// What a vehicle is doing at a report tick.
#[derive(Debug, Clone, Copy)]
pub enum VehicleStatus<'a> {
    /// Not started yet.  Only seen if a report is taken before the first tick
    /// is processed.
    Waiting,
    /// Driving `from → to` with `remaining` simulated seconds to go.
    OnRoad {
        from:      &'a IntersectionId,
        to:        &'a IntersectionId,
        remaining: u64,
    },
    /// Reached the destination at tick `at`.
    Arrived { at: Tick },
    /// Excluded from the run because routing failed.
    Unroutable { error: &'a GraphError },
}

/// One line of a status report.
#[derive(Debug, Clone, Copy)]
pub struct StatusLine<'a> {
    pub vehicle: &'a VehicleId,
    pub status:  VehicleStatus<'a>,
}

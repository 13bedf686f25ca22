//! A vehicle paired with its route and movement state.

use log::debug;

use rn_core::{IntersectionId, Tick};
use rn_fleet::Vehicle;
use rn_graph::{GraphError, GraphResult, RoadGraph, Route};

use crate::{MovementState, Phase, StatusLine, VehicleStatus};

/// The outcome of routing a vehicle.
#[derive(Debug)]
pub enum Plan {
    Routed(Route),
    Excluded(GraphError),
}

/// One vehicle's trip through the simulation.
#[derive(Debug)]
pub struct Journey {
    vehicle: Vehicle,
    plan:    Plan,
    state:   MovementState,
}

impl Journey {
    /// Pair `vehicle` with its routing result.  A failed route produces an
    /// excluded journey that is finished from the start.
    pub fn new(vehicle: Vehicle, route: GraphResult<Route>) -> Self {
        match route {
            Ok(route) if route.path.is_empty() => {
                let error = GraphError::Unreachable {
                    from: vehicle.start().clone(),
                    to:   vehicle.end().clone(),
                };
                Self::excluded(vehicle, error)
            }
            Ok(route) => Self {
                vehicle,
                plan:  Plan::Routed(route),
                state: MovementState::pending(),
            },
            Err(error) => Self::excluded(vehicle, error),
        }
    }

    fn excluded(vehicle: Vehicle, error: GraphError) -> Self {
        Self { vehicle, plan: Plan::Excluded(error), state: MovementState::excluded() }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn route(&self) -> Option<&Route> {
        match &self.plan {
            Plan::Routed(r) => Some(r),
            Plan::Excluded(_) => None,
        }
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// The `(from, to)` pair currently being driven, if in transit.
    pub fn current_segment(&self) -> Option<(&IntersectionId, &IntersectionId)> {
        let route = self.route()?;
        if self.state.phase != Phase::InTransit {
            return None;
        }
        let seg = self.state.segment;
        Some((&route.path[seg], &route.path[seg + 1]))
    }

    pub fn status(&self) -> VehicleStatus<'_> {
        match (&self.plan, self.state.phase) {
            (Plan::Excluded(error), _) => VehicleStatus::Unroutable { error },
            (_, Phase::Arrived) => VehicleStatus::Arrived {
                at: self.state.arrived_at.unwrap_or_default(),
            },
            (Plan::Routed(_), Phase::InTransit) => match self.current_segment() {
                Some((from, to)) => VehicleStatus::OnRoad {
                    from,
                    to,
                    remaining: self.state.remaining,
                },
                None => VehicleStatus::Waiting,
            },
            _ => VehicleStatus::Waiting,
        }
    }

    pub fn status_line(&self) -> StatusLine<'_> {
        StatusLine { vehicle: self.vehicle.id(), status: self.status() }
    }

    // ── Tick processing ───────────────────────────────────────────────────

    /// Start of tick `now`: leave a finished segment and begin the next one,
    /// or arrive.  Returns `true` if the vehicle arrived this tick.
    ///
    /// Zero-time segments are crossed without spending a tick.  The travel
    /// time of each segment is looked up in `graph` when the segment starts.
    pub(crate) fn settle(&mut self, graph: &RoadGraph, now: Tick) -> GraphResult<bool> {
        let route = match &self.plan {
            Plan::Routed(r) => r,
            Plan::Excluded(_) => return Ok(false),
        };

        let mut seg = match self.state.phase {
            Phase::Pending => 0,
            Phase::InTransit if self.state.remaining == 0 => self.state.segment + 1,
            _ => return Ok(false),
        };

        // Segment count comes from the path, travel times from the graph.
        let segments = route.hops();
        loop {
            if seg >= segments {
                self.state = MovementState::arrived(segments, now);
                debug!("{}: {} arrived at {}", now, self.vehicle.id(), self.vehicle.end());
                return Ok(true);
            }

            let (from, to) = (&route.path[seg], &route.path[seg + 1]);
            let secs = graph.travel_time(from.as_str(), to.as_str())? as u64;
            if secs > 0 {
                self.state = MovementState::in_transit(seg, secs);
                debug!("{}: {} entering {from}->{to} ({secs} s)", now, self.vehicle.id());
                return Ok(false);
            }
            seg += 1;
        }
    }

    /// Spend `secs` simulated seconds of travel on the current segment.
    pub(crate) fn advance(&mut self, secs: u64) {
        if self.state.phase == Phase::InTransit {
            self.state.remaining = self.state.remaining.saturating_sub(secs);
        }
    }
}

//! Owned status rows written by output backends.

use rn_sim::{StatusLine, VehicleStatus};

/// Coarse vehicle state as written to output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    Waiting,
    OnRoad,
    Arrived,
    Unroutable,
}

impl RowState {
    pub fn as_str(self) -> &'static str {
        match self {
            RowState::Waiting    => "waiting",
            RowState::OnRoad     => "on_road",
            RowState::Arrived    => "arrived",
            RowState::Unroutable => "unroutable",
        }
    }
}

/// One vehicle's status at one report tick.
///
/// Fields that do not apply to `state` are empty / zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    pub tick:       u64,
    pub vehicle_id: String,
    pub state:      RowState,
    /// Current road, while on the road.
    pub from:       String,
    pub to:         String,
    /// Seconds left on the current road.
    pub remaining:  u64,
    /// Arrival tick, once arrived.
    pub arrived_at: Option<u64>,
    /// Routing failure, when unroutable.
    pub reason:     String,
}

impl StatusRow {
    pub fn from_line(tick: u64, line: &StatusLine<'_>) -> Self {
        let mut row = Self {
            tick,
            vehicle_id: line.vehicle.to_string(),
            state:      RowState::Waiting,
            from:       String::new(),
            to:         String::new(),
            remaining:  0,
            arrived_at: None,
            reason:     String::new(),
        };
        match line.status {
            VehicleStatus::Waiting => {}
            VehicleStatus::OnRoad { from, to, remaining } => {
                row.state = RowState::OnRoad;
                row.from = from.to_string();
                row.to = to.to_string();
                row.remaining = remaining;
            }
            VehicleStatus::Arrived { at } => {
                row.state = RowState::Arrived;
                row.arrived_at = Some(at.0);
            }
            VehicleStatus::Unroutable { error } => {
                row.state = RowState::Unroutable;
                row.reason = error.to_string();
            }
        }
        row
    }
}

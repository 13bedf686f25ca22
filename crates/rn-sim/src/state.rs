//! Per-vehicle movement state.

use rn_core::Tick;

/// Where a vehicle is in its journey.
///
/// ```text
/// Pending ──► InTransit ──► (next segment) InTransit ──► Arrived
///    │                                                      ▲
///    └──────────── zero-length path ────────────────────────┘
/// Excluded: no usable route; never moves
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Not yet started; becomes `InTransit` or `Arrived` on the first tick.
    Pending,
    /// Travelling along segment `MovementState::segment`.
    InTransit,
    /// Reached the final intersection.
    Arrived,
    /// Routing failed; the vehicle takes no part in the run.
    Excluded,
}

impl Phase {
    /// `true` once the vehicle no longer holds the simulation open.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Arrived | Phase::Excluded)
    }
}

/// The movement state for a single vehicle.
///
/// Only the simulator mutates this, once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementState {
    pub phase: Phase,

    /// Index of the current segment: the vehicle is driving from
    /// `path[segment]` to `path[segment + 1]`.  Equals the route's hop count
    /// once arrived.
    pub segment: usize,

    /// Simulated seconds left on the current segment.  Only meaningful while
    /// `InTransit`; zero means the segment end has been reached and the next
    /// tick moves on.
    pub remaining: u64,

    /// Tick at which the vehicle reached its destination.
    pub arrived_at: Option<Tick>,
}

impl MovementState {
    pub fn pending() -> Self {
        Self { phase: Phase::Pending, segment: 0, remaining: 0, arrived_at: None }
    }

    pub fn excluded() -> Self {
        Self { phase: Phase::Excluded, segment: 0, remaining: 0, arrived_at: None }
    }

    pub fn in_transit(segment: usize, remaining: u64) -> Self {
        Self { phase: Phase::InTransit, segment, remaining, arrived_at: None }
    }

    pub fn arrived(segment: usize, at: Tick) -> Self {
        Self { phase: Phase::Arrived, segment, remaining: 0, arrived_at: Some(at) }
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.phase.is_terminal()
    }
}

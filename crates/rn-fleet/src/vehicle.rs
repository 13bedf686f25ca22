//! A single vehicle's trip request.

use rn_core::{IntersectionId, VehicleId};

/// A vehicle and the trip it wants to make.
///
/// Immutable once created.  `start` and `end` are intersection keys, not
/// graph handles: a vehicle can name intersections the graph has never
/// heard of, which routing then reports as `UnknownIntersection`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vehicle {
    id:    VehicleId,
    start: IntersectionId,
    end:   IntersectionId,
}

impl Vehicle {
    pub fn new(
        id:    impl Into<VehicleId>,
        start: impl Into<IntersectionId>,
        end:   impl Into<IntersectionId>,
    ) -> Self {
        Self { id: id.into(), start: start.into(), end: end.into() }
    }

    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    pub fn start(&self) -> &IntersectionId {
        &self.start
    }

    pub fn end(&self) -> &IntersectionId {
        &self.end
    }
}

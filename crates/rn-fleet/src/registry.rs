//! The `VehicleRegistry` — every vehicle in load order.

use std::collections::HashMap;

use rn_core::{VehicleId, VehicleIndex};

use crate::{FleetError, FleetResult, Vehicle};

/// Owns all vehicles, indexed by [`VehicleIndex`] in insertion order.
///
/// Insertion order is the order vehicles are simulated and reported in.
#[derive(Debug, Clone, Default)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
    by_id:    HashMap<VehicleId, VehicleIndex>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `vehicle`, rejecting a second vehicle with the same id.
    pub fn register(&mut self, vehicle: Vehicle) -> FleetResult<VehicleIndex> {
        if self.by_id.contains_key(vehicle.id()) {
            return Err(FleetError::DuplicateVehicle(vehicle.id().clone()));
        }
        let idx = VehicleIndex(self.vehicles.len() as u32);
        self.by_id.insert(vehicle.id().clone(), idx);
        self.vehicles.push(vehicle);
        Ok(idx)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn get(&self, idx: VehicleIndex) -> Option<&Vehicle> {
        self.vehicles.get(idx.index())
    }

    pub fn find(&self, id: &str) -> Option<&Vehicle> {
        self.by_id.get(id).map(|&idx| &self.vehicles[idx.index()])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    pub fn as_slice(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

impl<'a> IntoIterator for &'a VehicleRegistry {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}

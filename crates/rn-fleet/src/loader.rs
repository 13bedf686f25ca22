//! CSV vehicle list loader.
//!
//! # CSV format
//!
//! A header row followed by one vehicle per line, columns read by position:
//!
//! ```csv
//! Vehicle,Start,End
//! V1,A,D
//! V2,B,E
//! ```
//!
//! Vehicles keep file order; that order drives simulation and reporting.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{FleetError, FleetResult, Vehicle, VehicleRegistry};

#[derive(Deserialize)]
struct VehicleRecord {
    vehicle_id: String,
    start:      String,
    end:        String,
}

/// Load the vehicle registry from a CSV file.
pub fn load_vehicles_csv(path: &Path) -> FleetResult<VehicleRegistry> {
    let file = std::fs::File::open(path)?;
    load_vehicles_reader(file)
}

/// Like [`load_vehicles_csv`] but accepts any `Read` source.
pub fn load_vehicles_reader<R: Read>(reader: R) -> FleetResult<VehicleRegistry> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut registry = VehicleRegistry::new();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: VehicleRecord = record.deserialize(None)?;

        if row.vehicle_id.is_empty() {
            return Err(FleetError::Parse(format!("line {line}: empty vehicle id")));
        }
        if row.start.is_empty() || row.end.is_empty() {
            return Err(FleetError::Parse(format!(
                "line {line}: vehicle {} has an empty start or end",
                row.vehicle_id
            )));
        }

        registry.register(Vehicle::new(row.vehicle_id, row.start, row.end))?;
    }

    debug!("loaded {} vehicles", registry.len());
    Ok(registry)
}

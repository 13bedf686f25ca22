use rn_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("vehicle {0} is listed more than once")]
    DuplicateVehicle(VehicleId),

    #[error("vehicle list parse error: {0}")]
    Parse(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FleetResult<T> = Result<T, FleetError>;

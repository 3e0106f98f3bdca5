use gs_core::VehicleId;
use gs_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MobilityError {
    #[error("vehicle {0} is not in the fleet")]
    UnknownVehicle(VehicleId),

    #[error("vehicle {0} is already in the fleet")]
    DuplicateVehicle(VehicleId),

    #[error("tick produced {got} vehicle records for a fleet of {expected}")]
    FleetSizeMismatch { expected: usize, got: usize },

    #[error("fleet is full at {0} vehicles")]
    FleetFull(usize),

    #[error("routing failed: {0}")]
    Routing(#[from] GridError),

    #[error("unit parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type MobilityResult<T> = Result<T, MobilityError>;

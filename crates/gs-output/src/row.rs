//! Plain data row types written by output backends.

use gs_core::Tick;
use gs_mobility::{Vehicle, VehicleState};

/// One vehicle's position and progress at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub tick:       u64,
    pub vehicle_id: String,
    pub lng:        f64,
    pub lat:        f64,
    /// Radians counter-clockwise from east.
    pub heading:    f64,
    pub state:      VehicleState,
    /// Waypoints still queued.
    pub pending:    u32,
}

impl VehicleSnapshotRow {
    pub fn from_vehicle(tick: Tick, vehicle: &Vehicle) -> Self {
        Self {
            tick:       tick.0,
            vehicle_id: vehicle.id.as_str().to_owned(),
            lng:        vehicle.pos.lng,
            lat:        vehicle.pos.lat,
            heading:    vehicle.heading,
            state:      vehicle.state,
            pending:    u32::try_from(vehicle.waypoints.len()).unwrap_or(u32::MAX),
        }
    }
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    /// Simulated milliseconds since tick 0 at the configured interval.
    pub elapsed_ms: u64,
    pub moved:      u64,
    pub arrived:    u64,
}

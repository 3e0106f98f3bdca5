//! Pure per-tick movement.
//!
//! Nothing here touches shared state: [`advance_vehicle`] reads one record
//! and returns the next one, so a tick over many vehicles can compute every
//! update from the same snapshot before committing any of them.

use gs_core::GeoPoint;

use crate::{Vehicle, VehicleState};

/// Result of one [`step_towards`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub next:    GeoPoint,
    /// `true` when `next` is exactly the target.
    pub arrived: bool,
}

/// Move from `current` toward `target` by `step_deg`.
///
/// When the target is within `step_deg` (Euclidean, in degree space) the step
/// lands exactly on it.  Otherwise the result lies `step_deg` along the
/// straight line from `current` to `target`.
pub fn step_towards(current: GeoPoint, target: GeoPoint, step_deg: f64) -> Step {
    let dx = target.lng - current.lng;
    let dy = target.lat - current.lat;
    let distance = dx.hypot(dy);

    if distance <= step_deg {
        return Step { next: target, arrived: true };
    }
    Step {
        next: GeoPoint {
            lng: current.lng + dx / distance * step_deg,
            lat: current.lat + dy / distance * step_deg,
        },
        arrived: false,
    }
}

/// Advance `vehicle` by one tick and return the updated record.
///
/// Vehicles that are not `Enroute`, or have nothing queued, come back
/// unchanged.  Otherwise the heading is re-aimed at the head waypoint every
/// tick, the vehicle steps toward it, and a reached waypoint is popped.
/// Reaching the final waypoint leaves the vehicle `Arrived` on it with an
/// empty queue.
pub fn advance_vehicle(vehicle: &Vehicle) -> Vehicle {
    let Some(target) = vehicle.next_waypoint() else {
        return vehicle.clone();
    };
    if vehicle.state != VehicleState::Enroute {
        return vehicle.clone();
    }

    let heading = (target.lat - vehicle.pos.lat).atan2(target.lng - vehicle.pos.lng);
    let step = step_towards(vehicle.pos, target, vehicle.speed);

    let mut next = vehicle.clone();
    next.heading = heading;
    next.pos = step.next;

    if step.arrived {
        next.waypoints.pop_front();
        if next.waypoints.is_empty() {
            next.state = VehicleState::Arrived;
        }
    }
    next
}

//! Per-vehicle runtime record.

use std::collections::VecDeque;

use gs_core::{GeoPoint, VehicleId, VehicleTypeId};

/// Lifecycle of one vehicle.
///
/// ```text
/// Idle ──assign_route──▶ Enroute ──last waypoint──▶ Arrived
///   ▲                                                   │
///   └──────────────────────── reset ────────────────────┘
/// ```
///
/// The stepper only ever performs `Enroute → Arrived`.  Leaving `Idle` and
/// leaving `Arrived` are the caller's job.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum VehicleState {
    #[default]
    Idle,
    Enroute,
    Arrived,
}

impl VehicleState {
    /// Lower-case label, used for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleState::Idle    => "idle",
            VehicleState::Enroute => "enroute",
            VehicleState::Arrived => "arrived",
        }
    }
}

impl std::fmt::Display for VehicleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One simulated vehicle.
///
/// `pos` and every entry of `waypoints` are lattice intersections, except
/// while `Enroute` between two of them, when `pos` lies on the straight
/// segment joining the previous intersection to `waypoints[0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,

    pub type_id: VehicleTypeId,

    pub pos: GeoPoint,

    /// Distance covered per tick, in coordinate degrees.
    pub speed: f64,

    /// Direction of travel in radians, counter-clockwise from east.
    pub heading: f64,

    /// Intersections still to visit, in order.
    pub waypoints: VecDeque<GeoPoint>,

    pub state: VehicleState,
}

impl Vehicle {
    /// An idle vehicle parked at `pos`, facing east.
    pub fn new(id: VehicleId, type_id: VehicleTypeId, pos: GeoPoint, speed: f64) -> Self {
        Self {
            id,
            type_id,
            pos,
            speed,
            heading: 0.0,
            waypoints: VecDeque::new(),
            state: VehicleState::Idle,
        }
    }

    /// Replace the waypoint queue.
    ///
    /// The previous queue is discarded entirely, so re-routing mid-trip never
    /// merges routes.  A non-empty route puts the vehicle `Enroute`; an empty
    /// one parks it `Idle`.
    pub fn assign_route(&mut self, waypoints: impl IntoIterator<Item = GeoPoint>) {
        self.waypoints = waypoints.into_iter().collect();
        self.state = if self.waypoints.is_empty() {
            VehicleState::Idle
        } else {
            VehicleState::Enroute
        };
    }

    /// Drop any pending waypoints and return to `Idle`.  Position and heading
    /// are kept.
    pub fn reset(&mut self) {
        self.waypoints.clear();
        self.state = VehicleState::Idle;
    }

    #[inline]
    pub fn next_waypoint(&self) -> Option<GeoPoint> {
        self.waypoints.front().copied()
    }

    #[inline]
    pub fn is_enroute(&self) -> bool {
        self.state == VehicleState::Enroute
    }
}

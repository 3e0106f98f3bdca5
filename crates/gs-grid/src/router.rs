//! Route planning over the street lattice.
//!
//! # Pluggability
//!
//! Simulation code plans routes through the [`Router`] trait so a different
//! planner (one that alternates axes, or one that avoids closed streets) can
//! be swapped in without touching the tick loop.  The default
//! [`ManhattanRouter`] walks longitude first, then latitude.

use gs_core::GeoPoint;

use crate::{GridResult, StreetGrid};

// ── Route ─────────────────────────────────────────────────────────────────────

/// An ordered list of intersections to visit.  The origin is not included;
/// the last waypoint is the destination intersection.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub waypoints: Vec<GeoPoint>,
}

impl Route {
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// The final waypoint.
    #[inline]
    pub fn destination(&self) -> Option<GeoPoint> {
        self.waypoints.last().copied()
    }

    /// Polyline length in degrees when driven from `origin`.
    pub fn length_deg(&self, origin: GeoPoint) -> f64 {
        let mut prev = origin;
        let mut total = 0.0;
        for &wp in &self.waypoints {
            total += prev.distance_deg(wp);
            prev = wp;
        }
        total
    }

    /// Estimated ticks a vehicle moving `speed` degrees per tick needs to
    /// drive the route from `origin`.  Each waypoint costs at least one tick
    /// because the stepper stops on every intersection.
    pub fn ticks_at(&self, origin: GeoPoint, speed: f64) -> u64 {
        let mut prev = origin;
        let mut ticks = 0u64;
        for &wp in &self.waypoints {
            ticks += ((prev.distance_deg(wp) / speed).ceil() as u64).max(1);
            prev = wp;
        }
        ticks
    }

    pub fn into_waypoints(self) -> Vec<GeoPoint> {
        self.waypoints
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable route planner.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so a simulation can be driven from
/// a worker thread.
pub trait Router: Send + Sync {
    /// Plan a route from `from` to `to`.  Both points may be arbitrary; the
    /// router is responsible for snapping them to the lattice.
    fn route(&self, grid: &StreetGrid, from: GeoPoint, to: GeoPoint) -> GridResult<Route>;
}

/// Longitude-first, latitude-second lattice walk.
pub struct ManhattanRouter;

impl Router for ManhattanRouter {
    fn route(&self, grid: &StreetGrid, from: GeoPoint, to: GeoPoint) -> GridResult<Route> {
        grid.path_to_destination(from, to).map(|waypoints| Route { waypoints })
    }
}

// ── Lattice walk ──────────────────────────────────────────────────────────────

impl StreetGrid {
    /// Intersections from `from` to `to`, walking the longitude axis one
    /// street at a time, then the latitude axis.
    ///
    /// Both endpoints are snapped with [`closest_intersection`] first.  The
    /// snapped origin is never part of the result.  The result always ends at
    /// the snapped destination and is never empty: when both endpoints snap
    /// to the same intersection it is that single intersection.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidCoordinate`] if either point is NaN or infinite.
    ///
    /// [`closest_intersection`]: StreetGrid::closest_intersection
    /// [`GridError::InvalidCoordinate`]: crate::GridError::InvalidCoordinate
    pub fn path_to_destination(&self, from: GeoPoint, to: GeoPoint) -> GridResult<Vec<GeoPoint>> {
        let from = Self::check_finite(from)?;
        let to = Self::check_finite(to)?;

        let target = self.closest_intersection(to);
        let (mut lng_i, mut lat_i) = self.axis_indices(from);
        let (target_lng_i, target_lat_i) = self.axis_indices(target);

        let hops = lng_i.abs_diff(target_lng_i) + lat_i.abs_diff(target_lat_i);
        let mut path = Vec::with_capacity(hops.max(1));

        while lng_i != target_lng_i {
            if target_lng_i > lng_i { lng_i += 1 } else { lng_i -= 1 }
            path.push(self.intersection_at(lng_i, lat_i));
        }
        while lat_i != target_lat_i {
            if target_lat_i > lat_i { lat_i += 1 } else { lat_i -= 1 }
            path.push(self.intersection_at(lng_i, lat_i));
        }

        if path.last() != Some(&target) {
            path.push(target);
        }
        Ok(path)
    }
}

/// Three-corner preview polyline `[from, (to.lng, from.lat), to]`.
///
/// Raw points, no snapping: this is only for drawing a rough route shape.
pub fn l_shape_path(from: GeoPoint, to: GeoPoint) -> [GeoPoint; 3] {
    [from, GeoPoint::new(to.lng, from.lat), to]
}

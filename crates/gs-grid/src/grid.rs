//! The street lattice and point snapping.

use gs_core::{Bounds, GeoPoint, GridConfig};
use tracing::debug;

use crate::{Axis, GridError, GridResult};

/// Bounding region plus one [`Axis`] per dimension.
///
/// Construct once at start-up and share by reference; every method takes
/// `&self`.
#[derive(Clone, Debug)]
pub struct StreetGrid {
    bounds: Bounds,
    lng:    Axis,
    lat:    Axis,
}

impl StreetGrid {
    /// Build the lattice over `bounds` with the given street spacing.
    pub fn new(bounds: Bounds, lng_step: f64, lat_step: f64) -> GridResult<Self> {
        let lng = Axis::build(bounds.west, bounds.east, lng_step)?;
        let lat = Axis::build(bounds.south, bounds.north, lat_step)?;
        debug!(
            lng_streets = lng.len(),
            lat_streets = lat.len(),
            "built street grid"
        );
        Ok(Self { bounds, lng, lat })
    }

    /// Validate `config` and build the lattice it describes.
    pub fn from_config(config: &GridConfig) -> GridResult<Self> {
        config.validate()?;
        Self::new(config.bounds, config.lng_step, config.lat_step)
    }

    #[inline]
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    #[inline]
    pub fn lng_axis(&self) -> &Axis {
        &self.lng
    }

    #[inline]
    pub fn lat_axis(&self) -> &Axis {
        &self.lat
    }

    /// Total number of intersections in the lattice.
    pub fn intersection_count(&self) -> usize {
        self.lng.len() * self.lat.len()
    }

    // ── Snapping ──────────────────────────────────────────────────────────

    /// Snap `point` to a lattice intersection.
    ///
    /// Each coordinate is snapped to its own axis independently.  This is not
    /// a true 2-D nearest-neighbour search, but for a rectangular lattice the
    /// two coincide except on exact ties.  Points outside the bounds snap to
    /// the nearest edge street.
    pub fn closest_intersection(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint {
            lng: self.lng.nearest_value(point.lng),
            lat: self.lat.nearest_value(point.lat),
        }
    }

    /// The intersection nearest the middle of the bounds.
    pub fn center(&self) -> GeoPoint {
        self.closest_intersection(self.bounds.center())
    }

    /// Clamp raw coordinates into the bounding region without snapping them
    /// to the lattice.  Use for raw user input such as a map click.
    #[inline]
    pub fn snap_to_bounds(&self, point: GeoPoint) -> GeoPoint {
        self.bounds.clamp(point)
    }

    /// `(lng_index, lat_index)` of the intersection nearest to `point`.
    #[inline]
    pub fn axis_indices(&self, point: GeoPoint) -> (usize, usize) {
        (self.lng.nearest_index(point.lng), self.lat.nearest_index(point.lat))
    }

    /// The intersection at the given axis indices.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    pub fn intersection_at(&self, lng_index: usize, lat_index: usize) -> GeoPoint {
        GeoPoint::new(self.lng.at(lng_index), self.lat.at(lat_index))
    }

    /// `true` if both coordinates are exact axis members.
    pub fn is_intersection(&self, point: GeoPoint) -> bool {
        self.lng.contains(point.lng) && self.lat.contains(point.lat)
    }

    /// Reject non-finite coordinates before they reach index arithmetic.
    #[inline]
    pub fn check_finite(point: GeoPoint) -> GridResult<GeoPoint> {
        if point.is_finite() {
            Ok(point)
        } else {
            Err(GridError::InvalidCoordinate(point))
        }
    }
}

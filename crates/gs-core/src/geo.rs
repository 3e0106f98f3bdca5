//! Geographic coordinate types.
//!
//! Coordinates are `f64`.  Grid axes are rounded to 5 decimal places (about
//! 1 m), which single precision cannot hold without drift at city
//! longitudes such as -58.5.

use serde::{Deserialize, Serialize};

/// A WGS-84 coordinate in `(longitude, latitude)` order.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// `true` when neither coordinate is NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.lng.is_finite() && self.lat.is_finite()
    }

    /// Straight-line distance in coordinate-degree space.
    ///
    /// This is the unit vehicle speeds are expressed in; it is not a
    /// physical distance.
    #[inline]
    pub fn distance_deg(self, other: GeoPoint) -> f64 {
        (other.lng - self.lng).hypot(other.lat - self.lat)
    }

    /// Haversine great-circle distance in metres.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lng = (other.lng - self.lng).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lng, self.lat)
    }
}

// ── Bounds ────────────────────────────────────────────────────────────────────

/// The simulated area.  Fixed at configuration time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub west:  f64,
    pub south: f64,
    pub east:  f64,
    pub north: f64,
}

impl Bounds {
    pub fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self { west, south, east, north }
    }

    /// All four bounds are finite and each pair is ordered.
    pub fn is_valid(&self) -> bool {
        [self.west, self.south, self.east, self.north].iter().all(|v| v.is_finite())
            && self.west < self.east
            && self.south < self.north
    }

    /// Clamp each coordinate independently into the region.
    #[inline]
    pub fn clamp(&self, point: GeoPoint) -> GeoPoint {
        GeoPoint {
            lng: point.lng.clamp(self.west, self.east),
            lat: point.lat.clamp(self.south, self.north),
        }
    }

    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            lng: (self.west + self.east) / 2.0,
            lat: (self.south + self.north) / 2.0,
        }
    }

    #[inline]
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.west..=self.east).contains(&point.lng)
            && (self.south..=self.north).contains(&point.lat)
    }
}

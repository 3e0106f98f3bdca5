//! Display-only route previews.
//!
//! A preview is what a booking screen draws between a vehicle and the chosen
//! destination, together with a distance and duration estimate.  Real
//! deployments back this with a remote directions service; that client lives
//! outside this workspace and only has to implement [`PreviewProvider`].
//!
//! Previews never drive movement.  Vehicles follow the lattice route from
//! [`Router`](crate::Router) regardless of what the preview showed.

use gs_core::GeoPoint;
use thiserror::Error;

use crate::l_shape_path;

/// Errors a preview provider may report.  Callers treat every variant as
/// "no preview available" and carry on.
#[derive(Debug, Error)]
pub enum PreviewError {
    #[error("no preview route from {from} to {to}")]
    NoRoute { from: GeoPoint, to: GeoPoint },

    #[error("preview provider unavailable: {0}")]
    Unavailable(String),
}

/// A drawable route with summary figures.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewRoute {
    /// Polyline vertices in travel order, origin first.
    pub coordinates:      Vec<GeoPoint>,
    pub distance_km:      f64,
    pub duration_minutes: f64,
}

/// Source of preview routes.
pub trait PreviewProvider: Send + Sync {
    fn preview(&self, from: GeoPoint, to: GeoPoint) -> Result<PreviewRoute, PreviewError>;
}

/// Offline provider: the three-corner L-shape with haversine length and a
/// duration at a fixed average speed.
#[derive(Debug, Clone)]
pub struct LShapePreview {
    pub average_speed_kmh: f64,
}

impl Default for LShapePreview {
    fn default() -> Self {
        Self { average_speed_kmh: 30.0 }
    }
}

impl PreviewProvider for LShapePreview {
    fn preview(&self, from: GeoPoint, to: GeoPoint) -> Result<PreviewRoute, PreviewError> {
        if !(from.is_finite() && to.is_finite()) {
            return Err(PreviewError::NoRoute { from, to });
        }
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(PreviewError::Unavailable(format!(
                "average speed {} km/h is not positive",
                self.average_speed_kmh
            )));
        }

        let coordinates = l_shape_path(from, to).to_vec();
        let distance_km = coordinates
            .windows(2)
            .map(|w| w[0].distance_m(w[1]))
            .sum::<f64>()
            / 1_000.0;
        let duration_minutes = distance_km / self.average_speed_kmh * 60.0;

        Ok(PreviewRoute { coordinates, distance_km, duration_minutes })
    }
}

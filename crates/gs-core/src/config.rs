//! Simulation configuration.
//!
//! Every field has a default reproducing the Buenos Aires reference
//! deployment, so a JSON file only needs to list what it overrides:
//!
//! ```json
//! { "seed": 7, "grid": { "lng_step": 0.01 } }
//! ```

use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Bounds, GeoPoint, GsError, GsResult, SimClock, Tick};

// ── GridConfig ────────────────────────────────────────────────────────────────

/// Street lattice definition: the bounding region and the spacing between
/// parallel streets on each axis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub bounds: Bounds,
    /// Degrees between north–south streets.
    pub lng_step: f64,
    /// Degrees between east–west streets.
    pub lat_step: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            bounds:   Bounds::new(-58.52, -34.71, -58.31, -34.54),
            lng_step: 0.0085,
            lat_step: 0.008,
        }
    }
}

impl GridConfig {
    pub fn validate(&self) -> GsResult<()> {
        if !self.bounds.is_valid() {
            return Err(GsError::Config(format!(
                "bounds must be finite with west < east and south < north, got {:?}",
                self.bounds
            )));
        }
        for (name, step) in [("lng_step", self.lng_step), ("lat_step", self.lat_step)] {
            if !(step.is_finite() && step > 0.0) {
                return Err(GsError::Config(format!("{name} must be positive, got {step}")));
            }
        }
        Ok(())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub grid: GridConfig,

    /// Lower bound of the per-vehicle speed draw, in degrees per tick.
    pub speed_min: f64,

    /// Upper bound (inclusive) of the per-vehicle speed draw.
    pub speed_max: f64,

    /// Speed given to units added after initialisation.
    pub default_speed: f64,

    /// Where units added after initialisation appear (snapped to the grid).
    pub spawn_point: GeoPoint,

    /// Wall-clock milliseconds between ticks for the interval driver.
    pub tick_interval_ms: u64,

    /// Ticks simulated by `Sim::run`.  0 means `run` returns immediately.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed and seed units always produce the
    /// same fleet.
    pub seed: u64,

    /// Emit a position snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid:                  GridConfig::default(),
            speed_min:             0.00004,
            speed_max:             0.00007,
            default_speed:         0.00005,
            spawn_point:           GeoPoint::new(-58.3816, -34.6037),
            tick_interval_ms:      100,
            total_ticks:           6_000,
            seed:                  42,
            output_interval_ticks: 10,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document and validate it.
    pub fn from_json_str(json: &str) -> GsResult<Self> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file, then validate it.
    pub fn from_json_path(path: &Path) -> GsResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Check every invariant the grid and fleet rely on.
    pub fn validate(&self) -> GsResult<()> {
        self.grid.validate()?;

        let speeds_ok = self.speed_min.is_finite()
            && self.speed_max.is_finite()
            && self.speed_min > 0.0
            && self.speed_min <= self.speed_max;
        if !speeds_ok {
            return Err(GsError::Config(format!(
                "speed range must satisfy 0 < speed_min <= speed_max, got {}..={}",
                self.speed_min, self.speed_max
            )));
        }
        if !(self.default_speed.is_finite() && self.default_speed > 0.0) {
            return Err(GsError::Config(format!(
                "default_speed must be positive, got {}",
                self.default_speed
            )));
        }
        if !self.spawn_point.is_finite() {
            return Err(GsError::Config("spawn_point must be finite".into()));
        }
        if self.tick_interval_ms == 0 {
            return Err(GsError::Config("tick_interval_ms must be at least 1".into()));
        }
        Ok(())
    }

    #[inline]
    pub fn speed_range(&self) -> RangeInclusive<f64> {
        self.speed_min..=self.speed_max
    }

    /// The tick at which `Sim::run` stops (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Construct a `SimClock` pre-configured for this run.
    pub fn make_clock(&self) -> SimClock {
        SimClock::new(self.tick_interval_ms)
    }
}

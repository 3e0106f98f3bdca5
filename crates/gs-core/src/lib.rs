//! `gs-core`: foundational types for the grid dispatch simulation.
//!
//! This crate is a dependency of every other `gs-*` crate.  It has no `gs-*`
//! dependencies and keeps its external ones small (`rand`, `thiserror`,
//! `serde`, `serde_json`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `Bounds`, degree and haversine distances  |
//! | [`ids`]         | `VehicleId`, `FleetIdx`                               |
//! | [`fleet`]       | `VehicleTypeId`, `VehicleCategory`                    |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng`                                              |
//! | [`config`]      | `GridConfig`, `SimConfig` (JSON-loadable)             |
//! | [`error`]       | `GsError`, `GsResult`                                 |

pub mod config;
pub mod error;
pub mod fleet;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{GridConfig, SimConfig};
pub use error::{GsError, GsResult};
pub use fleet::{VehicleCategory, VehicleTypeId};
pub use geo::{Bounds, GeoPoint};
pub use ids::{FleetIdx, VehicleId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};

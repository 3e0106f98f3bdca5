//! `gs-sim`: tick loop orchestrator for the grid dispatch simulation.
//!
//! # Two-phase tick
//!
//! ```text
//! for tick in clock.current_tick..config.total_ticks:
//!   ① Snapshot: next[i] = advance_vehicle(&vehicles[i]) for every vehicle
//!               (parallel with the `parallel` feature).
//!   ② Commit:   vehicles = next; sync unit positions; report arrivals.
//! ```
//!
//! Route requests ([`Sim::request_route`]) and ride resets
//! ([`Sim::reset_rides`]) take `&mut Sim` and therefore always land between
//! two ticks.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the snapshot phase on Rayon's thread pool.        |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gs_core::{GeoPoint, SimConfig, VehicleId};
//! use gs_grid::ManhattanRouter;
//! use gs_sim::{IntervalDriver, NoopObserver, SimBuilder};
//!
//! let config = SimConfig::default();
//! let mut sim = SimBuilder::new(config.clone(), units, ManhattanRouter).build()?;
//! sim.request_route(&VehicleId::from("SUV-031"), GeoPoint::new(-58.35, -34.59))?;
//! IntervalDriver::from_config(&config).max_ticks(600).run(&mut sim, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod driver;
pub mod error;
pub mod observer;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::SimBuilder;
pub use driver::{IntervalDriver, StopHandle};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{Sim, TickReport};

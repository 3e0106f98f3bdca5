//! `gs-mobility`: vehicle state, stepping, and the fleet registry.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                      |
//! |--------------|---------------------------------------------------------------|
//! | [`state`]    | `Vehicle` runtime record, `VehicleState` lifecycle            |
//! | [`stepper`]  | `step_towards`, `advance_vehicle`: pure per-tick movement     |
//! | [`units`]    | `VehicleUnit` seed descriptor, CSV loader                     |
//! | [`registry`] | `Fleet`: owned vehicle collection, route assignment, sync     |
//! | [`error`]    | `MobilityError`, `MobilityResult<T>`                          |
//!
//! # Movement model
//!
//! Vehicles follow polylines of lattice intersections:
//!
//! 1. A caller plans a route ([`Fleet::begin_route`]) and the vehicle's
//!    waypoint queue is replaced with it (`Idle → Enroute`).
//! 2. Every tick [`advance_vehicle`] moves the vehicle a fixed `speed`
//!    distance toward the head of the queue, turning to face it.
//! 3. A waypoint within reach is landed on exactly and popped.  Popping the
//!    last one ends the trip (`Enroute → Arrived`).
//! 4. [`Fleet::reset_all`] returns every vehicle to `Idle` in place.

pub mod error;
pub mod registry;
pub mod state;
pub mod stepper;
pub mod units;


pub use error::{MobilityError, MobilityResult};
pub use registry::{Fleet, initialize_vehicles_from_units};
pub use state::{Vehicle, VehicleState};
pub use stepper::{Step, advance_vehicle, step_towards};
pub use units::{VehicleUnit, load_units_csv, load_units_reader};

//! Simulation observer trait for progress reporting and data collection.

use gs_core::{Tick, VehicleId};
use gs_mobility::Fleet;

use crate::TickReport;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] and
/// [`Sim::step`][crate::Sim::step] at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: arrival logger
///
/// ```rust,ignore
/// struct ArrivalLog(Vec<(Tick, VehicleId)>);
///
/// impl SimObserver for ArrivalLog {
///     fn on_arrival(&mut self, tick: Tick, vehicle: &VehicleId) {
///         self.0.push((tick, vehicle.clone()));
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any vehicle moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called once per vehicle that reached its final waypoint this tick,
    /// in fleet order, before [`on_tick_end`](Self::on_tick_end).
    fn on_arrival(&mut self, _tick: Tick, _vehicle: &VehicleId) {}

    /// Called at the end of each tick with its summary.
    fn on_tick_end(&mut self, _report: &TickReport) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks), after the tick's updates have been committed.
    fn on_snapshot(&mut self, _tick: Tick, _fleet: &Fleet) {}

    /// Called once after the final tick of [`Sim::run`][crate::Sim::run].
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

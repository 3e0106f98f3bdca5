//! The `Sim` struct and its tick loop.

use gs_core::{FleetIdx, GeoPoint, SimClock, SimConfig, Tick, VehicleId};
use gs_grid::{PreviewProvider, PreviewRoute, Route, Router, StreetGrid};
use gs_mobility::{Fleet, MobilityError, Vehicle, VehicleUnit, advance_vehicle};
use tracing::{info, warn};

use crate::{SimObserver, SimResult};

// ── TickReport ────────────────────────────────────────────────────────────────

/// What happened during one tick.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TickReport {
    /// The tick that was processed.
    pub tick: Tick,

    /// Vehicles whose position changed.
    pub moved: usize,

    /// Vehicles that reached their final waypoint, in fleet order.
    pub arrived: Vec<VehicleId>,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// Each tick has two phases:
///
/// 1. **Snapshot** (optionally parallel with the `parallel` feature): every
///    vehicle's next record is computed by [`advance_vehicle`] from the
///    records as they stood when the tick began.
/// 2. **Commit**: all next records replace the old ones at once and the
///    displayable unit positions are synced.
///
/// No vehicle can observe another's mid-tick position, so results do not
/// depend on iteration order.
///
/// Route requests and ride resets happen between ticks, on `&mut self`, so
/// they can never interleave with a tick in progress.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Router> {
    /// Global configuration (grid, speeds, spawn point, tick interval, …).
    pub config: SimConfig,

    /// Simulation clock: the next tick to process.
    pub clock: SimClock,

    /// The street lattice every vehicle drives on.
    pub grid: StreetGrid,

    /// All vehicles and their unit records.
    pub fleet: Fleet,

    /// Plans lattice routes for [`request_route`](Self::request_route).
    pub router: R,

    /// Draws display-only previews for [`preview_route`](Self::preview_route).
    pub preview: Box<dyn PreviewProvider>,
}

impl<R: Router> Sim<R> {
    // ── Commands ──────────────────────────────────────────────────────────

    /// Send `vehicle` toward `destination`.
    ///
    /// The destination is clamped into the grid bounds, a lattice route is
    /// planned from the vehicle's current position, and the route replaces
    /// whatever the vehicle was doing.  Returns the number of waypoints.
    ///
    /// # Errors
    ///
    /// Unknown vehicle id, or a NaN/infinite destination.  The vehicle is
    /// left unchanged in either case.
    pub fn request_route(
        &mut self,
        vehicle:     &VehicleId,
        destination: GeoPoint,
    ) -> SimResult<usize> {
        self.fleet
            .begin_route(vehicle, destination, &self.grid, &self.router)
            .map_err(|e| {
                warn!(%vehicle, %destination, error = %e, "route request rejected");
                e.into()
            })
    }

    /// End every ride.  Vehicles stay where they are, `Idle`, with empty
    /// queues.
    pub fn reset_rides(&mut self) {
        self.fleet.reset_all();
    }

    /// Add a unit to the running simulation.  It appears idle at the
    /// configured spawn point, moving at the configured default speed.
    pub fn add_unit(&mut self, unit: VehicleUnit) -> SimResult<FleetIdx> {
        let idx = self.fleet.add_unit(
            unit,
            &self.grid,
            self.config.spawn_point,
            self.config.default_speed,
        )?;
        Ok(idx)
    }

    /// Preview the route from `vehicle` to `destination` for display.
    ///
    /// Returns `Ok(None)` when the preview provider fails; previews are
    /// optional and never block a booking.
    ///
    /// # Errors
    ///
    /// Unknown vehicle id.
    pub fn preview_route(
        &self,
        vehicle:     &VehicleId,
        destination: GeoPoint,
    ) -> SimResult<Option<PreviewRoute>> {
        let from = self
            .fleet
            .get(vehicle)
            .ok_or_else(|| MobilityError::UnknownVehicle(vehicle.clone()))?
            .pos;

        match self.preview.preview(from, destination) {
            Ok(route) => Ok(Some(route)),
            Err(e) => {
                warn!(%vehicle, %destination, error = %e, "route preview unavailable");
                Ok(None)
            }
        }
    }

    /// Estimated tick on which `vehicle` reports its arrival, or `None` when
    /// it has no ride in progress.
    ///
    /// # Errors
    ///
    /// Unknown vehicle id.
    pub fn eta(&self, vehicle: &VehicleId) -> SimResult<Option<Tick>> {
        let v = self
            .fleet
            .get(vehicle)
            .ok_or_else(|| MobilityError::UnknownVehicle(vehicle.clone()))?;
        if !v.is_enroute() || v.waypoints.is_empty() {
            return Ok(None);
        }
        let remaining = Route { waypoints: v.waypoints.iter().copied().collect() };
        let ticks = remaining.ticks_at(v.pos, v.speed);
        Ok(Some(self.clock.current_tick.offset(ticks.saturating_sub(1))))
    }

    // ── Running ───────────────────────────────────────────────────────────

    /// Advance every vehicle by one tick.
    pub fn tick(&mut self) -> SimResult<TickReport> {
        let now = self.clock.current_tick;

        let next = self.compute_next();
        let moved = self
            .fleet
            .iter()
            .zip(&next)
            .filter(|(before, after)| before.pos != after.pos)
            .count();
        let arrived = self.fleet.commit_tick(next)?;

        self.clock.advance();
        Ok(TickReport { tick: now, moved, arrived })
    }

    /// One tick with observer hooks.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<TickReport> {
        let now = self.clock.current_tick;
        observer.on_tick_start(now);

        let report = self.tick()?;
        for vehicle in &report.arrived {
            observer.on_arrival(now, vehicle);
        }
        observer.on_tick_end(&report);

        if self.config.output_interval_ticks > 0
            && now.0.is_multiple_of(self.config.output_interval_ticks)
        {
            observer.on_snapshot(now, &self.fleet);
        }
        Ok(report)
    }

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            vehicles = self.fleet.len(),
            from = %self.clock.current_tick,
            to = %self.config.end_tick(),
            "simulation started"
        );

        let started = self.clock.current_tick;
        let mut arrivals = 0usize;
        while self.clock.current_tick < self.config.end_tick() {
            arrivals += self.step(observer)?.arrived.len();
        }

        observer.on_sim_end(self.clock.current_tick);
        info!(
            clock = %self.clock,
            ticks = self.clock.current_tick - started,
            arrivals,
            "simulation finished"
        );
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let end = self.clock.current_tick + n;
        while self.clock.current_tick < end {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Every vehicle's next record, computed from the current records only.
    ///
    /// With the `parallel` Cargo feature the records are computed on Rayon's
    /// thread pool.  Output order matches fleet order either way.
    fn compute_next(&self) -> Vec<Vehicle> {
        let vehicles = self.fleet.vehicles();

        #[cfg(not(feature = "parallel"))]
        {
            vehicles.iter().map(advance_vehicle).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            vehicles.par_iter().map(advance_vehicle).collect()
        }
    }
}

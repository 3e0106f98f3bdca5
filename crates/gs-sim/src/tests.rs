//! Integration tests for gs-sim.

use std::time::Duration;

use gs_core::{GeoPoint, SimConfig, Tick, VehicleId, VehicleTypeId};
use gs_grid::ManhattanRouter;
use gs_mobility::{Fleet, VehicleState, VehicleUnit};

use crate::{NoopObserver, Sim, SimBuilder, SimObserver, TickReport};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Reference deployment with every vehicle moving exactly 0.00005 per tick.
fn test_config(total_ticks: u64) -> SimConfig {
    SimConfig {
        speed_min: 0.00005,
        speed_max: 0.00005,
        total_ticks,
        output_interval_ticks: 0,
        ..SimConfig::default()
    }
}

fn seed_units() -> Vec<VehicleUnit> {
    vec![
        VehicleUnit::new("SUV-031", VehicleTypeId::LuxurySportSuv, -58.3835, -34.6027),
        VehicleUnit::new("HV-210",  VehicleTypeId::MobileCrane,    -58.4000, -34.6000),
    ]
}

fn build(config: SimConfig) -> Sim<ManhattanRouter> {
    SimBuilder::new(config, seed_units(), ManhattanRouter).build().unwrap()
}

fn hv() -> VehicleId {
    VehicleId::from("HV-210")
}

/// Records every hook invocation.
#[derive(Default)]
struct Recorder {
    starts:    Vec<Tick>,
    arrivals:  Vec<(Tick, VehicleId)>,
    reports:   Vec<TickReport>,
    snapshots: Vec<Tick>,
    end:       Option<Tick>,
}

impl SimObserver for Recorder {
    fn on_tick_start(&mut self, tick: Tick) {
        self.starts.push(tick);
    }
    fn on_arrival(&mut self, tick: Tick, vehicle: &VehicleId) {
        self.arrivals.push((tick, vehicle.clone()));
    }
    fn on_tick_end(&mut self, report: &TickReport) {
        self.reports.push(report.clone());
    }
    fn on_snapshot(&mut self, tick: Tick, _fleet: &Fleet) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, final_tick: Tick) {
        self.end = Some(final_tick);
    }
}

// ── SimBuilder ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_snapped_idle_fleet() {
        let sim = build(test_config(10));
        assert_eq!(sim.fleet.len(), 2);
        assert_eq!(sim.clock.current_tick, Tick(0));
        for v in sim.fleet.iter() {
            assert!(sim.grid.is_intersection(v.pos));
            assert_eq!(v.state, VehicleState::Idle);
            assert_eq!(v.speed, 0.00005);
        }
    }

    #[test]
    fn invalid_config_rejected() {
        let config = SimConfig { speed_min: 0.0, ..SimConfig::default() };
        let result = SimBuilder::new(config, seed_units(), ManhattanRouter).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn duplicate_units_rejected() {
        let mut units = seed_units();
        units.push(units[1].clone());
        let result = SimBuilder::new(test_config(10), units, ManhattanRouter).build();
        assert!(matches!(result, Err(SimError::Mobility(_))));
    }

    #[test]
    fn same_seed_same_fleet() {
        let a = SimBuilder::new(SimConfig::default(), seed_units(), ManhattanRouter).build().unwrap();
        let b = SimBuilder::new(SimConfig::default(), seed_units(), ManhattanRouter).build().unwrap();
        assert_eq!(a.fleet.vehicles(), b.fleet.vehicles());
    }
}

// ── Ticking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tick_tests {
    use super::*;
    use crate::SimError;
    use gs_mobility::MobilityError;

    #[test]
    fn idle_fleet_does_not_move() {
        let mut sim = build(test_config(10));
        let before = sim.fleet.vehicles().to_vec();
        let report = sim.tick().unwrap();
        assert_eq!(report, TickReport { tick: Tick(0), moved: 0, arrived: vec![] });
        assert_eq!(sim.fleet.vehicles(), before.as_slice());
        assert_eq!(sim.clock.current_tick, Tick(1));
    }

    #[test]
    fn reference_trip_arrives_on_schedule() {
        let mut sim = build(test_config(2_000));
        let hops = sim.request_route(&hv(), GeoPoint::new(-58.350, -34.590)).unwrap();
        assert_eq!(hops, 7);

        let mut rec = Recorder::default();
        sim.run_ticks(1_200, &mut rec).unwrap();

        // 6 × 170 ticks along longitude, 160 along latitude.
        assert_eq!(rec.arrivals, vec![(Tick(1_179), hv())]);
        let v = sim.fleet.get(&hv()).unwrap();
        assert_eq!(v.state, VehicleState::Arrived);
        assert_eq!(v.pos, sim.grid.closest_intersection(GeoPoint::new(-58.350, -34.590)));

        let idx = sim.fleet.idx_of(&hv()).unwrap().index();
        assert_eq!(sim.fleet.units()[idx].position(), v.pos);
    }

    #[test]
    fn moved_counts_only_enroute_vehicles() {
        let mut sim = build(test_config(10));
        sim.request_route(&hv(), GeoPoint::new(-58.45, -34.60)).unwrap();
        let report = sim.tick().unwrap();
        assert_eq!(report.moved, 1);
        assert!(report.arrived.is_empty());
    }

    #[test]
    fn sim_tick_matches_sequential_fleet_tick() {
        let mut sim = build(test_config(10));
        sim.request_route(&hv(), GeoPoint::new(-58.45, -34.65)).unwrap();
        sim.request_route(&VehicleId::from("SUV-031"), GeoPoint::new(-58.33, -34.55)).unwrap();

        let mut reference = build(test_config(10));
        reference.request_route(&hv(), GeoPoint::new(-58.45, -34.65)).unwrap();
        reference.request_route(&VehicleId::from("SUV-031"), GeoPoint::new(-58.33, -34.55)).unwrap();

        for _ in 0..500 {
            sim.tick().unwrap();
            reference.fleet.tick().unwrap();
        }
        assert_eq!(sim.fleet.vehicles(), reference.fleet.vehicles());
    }

    #[test]
    fn rerouting_mid_trip_replaces_the_queue() {
        let mut sim = build(test_config(10));
        sim.request_route(&hv(), GeoPoint::new(-58.35, -34.59)).unwrap();
        sim.run_ticks(50, &mut NoopObserver).unwrap();
        sim.request_route(&hv(), GeoPoint::new(-58.45, -34.65)).unwrap();

        let target = sim.grid.closest_intersection(GeoPoint::new(-58.45, -34.65));
        assert_eq!(sim.fleet.get(&hv()).unwrap().waypoints.back(), Some(&target));
    }

    #[test]
    fn eta_tracks_the_actual_arrival() {
        let mut sim = build(test_config(10));
        assert_eq!(sim.eta(&hv()).unwrap(), None);
        assert!(sim.eta(&VehicleId::from("NOPE")).is_err());

        sim.run_ticks(7, &mut NoopObserver).unwrap();
        let hops = sim.request_route(&hv(), GeoPoint::new(-58.45, -34.65)).unwrap();
        let eta = sim.eta(&hv()).unwrap().expect("ride in progress");

        let mut rec = Recorder::default();
        sim.run_ticks(2_500, &mut rec).unwrap();
        assert_eq!(rec.arrivals.len(), 1);
        let arrived = rec.arrivals[0].0;
        assert!(
            arrived.0.abs_diff(eta.0) <= hops as u64,
            "eta {eta} vs arrival {arrived} over {hops} hops"
        );
        assert_eq!(sim.eta(&hv()).unwrap(), None);
    }

    #[test]
    fn rejected_requests_leave_vehicle_alone() {
        let mut sim = build(test_config(10));
        let err = sim.request_route(&VehicleId::from("NOPE"), GeoPoint::new(-58.4, -34.6));
        assert!(matches!(err, Err(SimError::Mobility(MobilityError::UnknownVehicle(_)))));

        let err = sim.request_route(&hv(), GeoPoint::new(f64::INFINITY, -34.6));
        assert!(matches!(err, Err(SimError::Mobility(MobilityError::Routing(_)))));
        assert_eq!(sim.fleet.get(&hv()).unwrap().state, VehicleState::Idle);
    }

    #[test]
    fn reset_rides_stops_in_place() {
        let mut sim = build(test_config(10));
        sim.request_route(&hv(), GeoPoint::new(-58.35, -34.59)).unwrap();
        sim.run_ticks(30, &mut NoopObserver).unwrap();
        let pos = sim.fleet.get(&hv()).unwrap().pos;

        sim.reset_rides();
        let report = sim.tick().unwrap();
        assert_eq!(report.moved, 0);
        assert_eq!(sim.fleet.get(&hv()).unwrap().pos, pos);
        assert!(sim.fleet.iter().all(|v| v.state == VehicleState::Idle));
    }

    #[test]
    fn added_unit_uses_spawn_point_and_default_speed() {
        let mut sim = build(test_config(10));
        let idx = sim
            .add_unit(VehicleUnit::new("PK-900", VehicleTypeId::StandardPickup, 0.0, 0.0))
            .unwrap();
        let v = &sim.fleet.vehicles()[idx.index()];
        assert_eq!(v.pos, sim.grid.closest_intersection(sim.config.spawn_point));
        assert_eq!(v.speed, sim.config.default_speed);

        // The new vehicle is routable straight away.
        sim.request_route(&VehicleId::from("PK-900"), GeoPoint::new(-58.40, -34.60)).unwrap();
        assert!(sim.tick().unwrap().moved >= 1);
    }
}

// ── Observer hooks ────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;

    #[test]
    fn run_stops_at_total_ticks() {
        let mut sim = build(test_config(25));
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.starts.len(), 25);
        assert_eq!(rec.reports.len(), 25);
        assert_eq!(rec.end, Some(Tick(25)));
        assert_eq!(sim.clock.current_tick, Tick(25));

        // Already at the end: nothing more happens.
        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert!(rec.starts.is_empty());
        assert_eq!(rec.end, Some(Tick(25)));
    }

    #[test]
    fn snapshots_follow_output_interval() {
        let config = SimConfig { output_interval_ticks: 5, ..test_config(100) };
        let mut sim = build(config);
        let mut rec = Recorder::default();
        sim.run_ticks(12, &mut rec).unwrap();
        assert_eq!(rec.snapshots, vec![Tick(0), Tick(5), Tick(10)]);
        assert_eq!(rec.end, None);
    }

    #[test]
    fn zero_interval_disables_snapshots() {
        let mut sim = build(test_config(100));
        let mut rec = Recorder::default();
        sim.run_ticks(20, &mut rec).unwrap();
        assert!(rec.snapshots.is_empty());
    }

    #[test]
    fn arrival_reported_once() {
        let mut sim = build(test_config(1_000));
        let start = sim.fleet.get(&hv()).unwrap().pos;
        let (i, j) = sim.grid.axis_indices(start);
        let next = sim.grid.intersection_at(i, j + 1);
        sim.request_route(&hv(), next).unwrap();

        let mut rec = Recorder::default();
        sim.run(&mut rec).unwrap();
        assert_eq!(rec.arrivals.len(), 1);
        let arrived_in: Vec<_> = rec.reports.iter().filter(|r| !r.arrived.is_empty()).collect();
        assert_eq!(arrived_in.len(), 1);
        assert_eq!(arrived_in[0].tick, rec.arrivals[0].0);
    }
}

// ── Route previews ────────────────────────────────────────────────────────────

#[cfg(test)]
mod preview_tests {
    use gs_grid::{PreviewError, PreviewProvider, PreviewRoute};

    use super::*;

    struct Offline;

    impl PreviewProvider for Offline {
        fn preview(&self, _from: GeoPoint, _to: GeoPoint) -> Result<PreviewRoute, PreviewError> {
            Err(PreviewError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn default_preview_starts_at_vehicle() {
        let sim = build(test_config(10));
        let route = sim
            .preview_route(&hv(), GeoPoint::new(-58.35, -34.59))
            .unwrap()
            .unwrap();
        assert_eq!(route.coordinates[0], sim.fleet.get(&hv()).unwrap().pos);
        assert!(route.distance_km > 0.0);
    }

    #[test]
    fn provider_failure_is_none() {
        let sim = SimBuilder::new(test_config(10), seed_units(), ManhattanRouter)
            .preview(Offline)
            .build()
            .unwrap();
        assert_eq!(sim.preview_route(&hv(), GeoPoint::new(-58.35, -34.59)).unwrap(), None);
        assert!(sim.preview_route(&VehicleId::from("NOPE"), GeoPoint::new(-58.35, -34.59)).is_err());
    }
}

// ── IntervalDriver ────────────────────────────────────────────────────────────

#[cfg(test)]
mod driver_tests {
    use super::*;
    use crate::{IntervalDriver, StopHandle};

    #[test]
    fn max_ticks_bounds_the_run() {
        let mut sim = build(test_config(10));
        let ticks = IntervalDriver::new(Duration::from_millis(1))
            .max_ticks(5)
            .run(&mut sim, &mut NoopObserver)
            .unwrap();
        assert_eq!(ticks, 5);
        assert_eq!(sim.clock.current_tick, Tick(5));
    }

    #[test]
    fn stopped_before_start_runs_nothing() {
        let mut sim = build(test_config(10));
        let driver = IntervalDriver::new(Duration::from_millis(1));
        driver.stop_handle().stop();
        assert_eq!(driver.run(&mut sim, &mut NoopObserver).unwrap(), 0);
    }

    #[test]
    fn stop_from_observer_finishes_current_tick() {
        struct StopAt {
            tick:   Tick,
            handle: StopHandle,
        }
        impl SimObserver for StopAt {
            fn on_tick_start(&mut self, tick: Tick) {
                if tick == self.tick {
                    self.handle.stop();
                }
            }
        }

        let mut sim = build(test_config(10));
        let driver = IntervalDriver::new(Duration::from_millis(1)).max_ticks(100);
        let mut observer = StopAt { tick: Tick(3), handle: driver.stop_handle() };
        let ticks = driver.run(&mut sim, &mut observer).unwrap();
        assert_eq!(ticks, 4);
        assert_eq!(sim.clock.current_tick, Tick(4));
    }

    #[test]
    fn interval_is_honoured() {
        let mut sim = build(test_config(10));
        let started = std::time::Instant::now();
        IntervalDriver::new(Duration::from_millis(10))
            .max_ticks(3)
            .run(&mut sim, &mut NoopObserver)
            .unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}

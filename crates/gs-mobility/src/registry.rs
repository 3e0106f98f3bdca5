//! `Fleet`: the owned vehicle collection plus the displayable unit records.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use gs_core::{FleetIdx, GeoPoint, SimRng, VehicleCategory, VehicleId};
use gs_grid::{Router, StreetGrid};
use tracing::{debug, info};

use crate::{MobilityError, MobilityResult, Vehicle, VehicleState, VehicleUnit, advance_vehicle};

/// Create one idle vehicle per unit.
///
/// Each vehicle starts on the intersection closest to its unit's raw
/// coordinates, facing east, with a speed drawn uniformly from
/// `speed_range`.  Speeds are drawn in unit order, so the same seed and the
/// same unit list always give the same speeds.
pub fn initialize_vehicles_from_units(
    units:       &[VehicleUnit],
    grid:        &StreetGrid,
    speed_range: RangeInclusive<f64>,
    rng:         &mut SimRng,
) -> Vec<Vehicle> {
    units
        .iter()
        .map(|unit| {
            Vehicle::new(
                unit.id.clone(),
                unit.type_id,
                grid.closest_intersection(unit.position()),
                rng.gen_range(speed_range.clone()),
            )
        })
        .collect()
}

/// Every simulated vehicle, indexed by [`FleetIdx`], plus the unit record
/// each one is displayed through.
///
/// `vehicles[i]` and `units[i]` always describe the same vehicle.  Vehicles
/// are never removed, so indices stay valid for the fleet's lifetime.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    units:    Vec<VehicleUnit>,
    index:    HashMap<VehicleId, FleetIdx>,
}

impl Fleet {
    /// Initialise vehicles from `units` and snap the units' displayed
    /// positions to match.
    ///
    /// # Errors
    ///
    /// [`MobilityError::DuplicateVehicle`] if two units share an id.
    pub fn from_units(
        units:       Vec<VehicleUnit>,
        grid:        &StreetGrid,
        speed_range: RangeInclusive<f64>,
        rng:         &mut SimRng,
    ) -> MobilityResult<Self> {
        let mut index = HashMap::with_capacity(units.len());
        for (i, unit) in units.iter().enumerate() {
            let idx = FleetIdx::try_from(i).map_err(|_| MobilityError::FleetFull(i))?;
            if index.insert(unit.id.clone(), idx).is_some() {
                return Err(MobilityError::DuplicateVehicle(unit.id.clone()));
            }
        }

        let vehicles = initialize_vehicles_from_units(&units, grid, speed_range, rng);
        let mut fleet = Self { vehicles, units, index };
        fleet.sync_units();
        info!(vehicles = fleet.len(), "fleet initialised");
        Ok(fleet)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    #[inline]
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    #[inline]
    pub fn units(&self) -> &[VehicleUnit] {
        &self.units
    }

    #[inline]
    pub fn idx_of(&self, id: &VehicleId) -> Option<FleetIdx> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.idx_of(id).map(|idx| &self.vehicles[idx.index()])
    }

    /// Direct mutable access, for callers that drive state transitions
    /// themselves.  Call [`sync_units`](Self::sync_units) afterwards if the
    /// position changed.
    pub fn get_mut(&mut self, id: &VehicleId) -> Option<&mut Vehicle> {
        let idx = self.idx_of(id)?;
        Some(&mut self.vehicles[idx.index()])
    }

    /// Units whose vehicle type belongs to `category`.
    pub fn units_in_category(
        &self,
        category: VehicleCategory,
    ) -> impl Iterator<Item = &VehicleUnit> + '_ {
        self.units.iter().filter(move |u| u.type_id.category() == category)
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Plan a route for `id` from its current position to `destination` and
    /// make it the vehicle's waypoint queue.
    ///
    /// `destination` is clamped into the grid bounds first.  Any previous
    /// queue is replaced, so the latest request always wins.  Returns the
    /// number of queued waypoints.
    ///
    /// A vehicle caught between two intersections first finishes its current
    /// block: the route is planned from the intersection it was heading for
    /// (or, with nothing queued, the nearest one on its street), and that
    /// intersection leads the new queue.
    pub fn begin_route<R: Router>(
        &mut self,
        id:          &VehicleId,
        destination: GeoPoint,
        grid:        &StreetGrid,
        router:      &R,
    ) -> MobilityResult<usize> {
        let idx = self
            .idx_of(id)
            .ok_or_else(|| MobilityError::UnknownVehicle(id.clone()))?;
        let vehicle = &mut self.vehicles[idx.index()];

        let destination = StreetGrid::check_finite(destination)?;
        let on_intersection = grid.is_intersection(vehicle.pos);
        let origin = match vehicle.next_waypoint() {
            Some(head) if vehicle.is_enroute() && !on_intersection => head,
            _ => grid.closest_intersection(vehicle.pos),
        };

        let route = router.route(grid, origin, grid.snap_to_bounds(destination))?;
        debug!(
            vehicle = %id,
            from = %vehicle.pos,
            to = ?route.destination(),
            hops = route.len(),
            "route assigned"
        );

        let mut waypoints = route.into_waypoints();
        if !on_intersection && waypoints.first() != Some(&origin) {
            waypoints.insert(0, origin);
        }
        let hops = waypoints.len();
        vehicle.assign_route(waypoints);
        Ok(hops)
    }

    /// Replace the waypoint queue of `id` with an externally planned one.
    pub fn assign_route(
        &mut self,
        id:        &VehicleId,
        waypoints: Vec<GeoPoint>,
    ) -> MobilityResult<()> {
        let vehicle = self
            .get_mut(id)
            .ok_or_else(|| MobilityError::UnknownVehicle(id.clone()))?;
        vehicle.assign_route(waypoints);
        Ok(())
    }

    /// End every ride: all vehicles `Idle` with empty queues, left where they
    /// currently are.
    pub fn reset_all(&mut self) {
        for vehicle in &mut self.vehicles {
            vehicle.reset();
        }
        self.sync_units();
        debug!(vehicles = self.len(), "all rides reset");
    }

    /// Add a unit after initialisation.
    ///
    /// The new vehicle ignores the unit's own coordinates and appears idle on
    /// the intersection nearest `spawn`, moving at `speed`.
    pub fn add_unit(
        &mut self,
        unit:  VehicleUnit,
        grid:  &StreetGrid,
        spawn: GeoPoint,
        speed: f64,
    ) -> MobilityResult<FleetIdx> {
        if self.index.contains_key(&unit.id) {
            return Err(MobilityError::DuplicateVehicle(unit.id));
        }
        let idx = FleetIdx::try_from(self.vehicles.len())
            .map_err(|_| MobilityError::FleetFull(self.vehicles.len()))?;

        let pos = grid.closest_intersection(spawn);
        self.vehicles.push(Vehicle::new(unit.id.clone(), unit.type_id, pos, speed));
        self.index.insert(unit.id.clone(), idx);
        self.units.push(VehicleUnit { lng: pos.lng, lat: pos.lat, ..unit });
        debug!(vehicle = %self.vehicles[idx.index()].id, at = %pos, "unit added");
        Ok(idx)
    }

    /// Copy every vehicle's position onto its unit record.
    pub fn sync_units(&mut self) {
        for (unit, vehicle) in self.units.iter_mut().zip(&self.vehicles) {
            unit.lng = vehicle.pos.lng;
            unit.lat = vehicle.pos.lat;
        }
    }

    // ── Ticking ───────────────────────────────────────────────────────────

    /// Advance every vehicle one tick on the calling thread.  Returns the ids
    /// of vehicles that arrived during this tick.
    pub fn tick(&mut self) -> MobilityResult<Vec<VehicleId>> {
        let next: Vec<Vehicle> = self.vehicles.iter().map(advance_vehicle).collect();
        self.commit_tick(next)
    }

    /// Replace all vehicle records at once with `next`, computed from the
    /// current records, and sync unit positions.
    ///
    /// Returns the ids of vehicles that went from `Enroute` to `Arrived`.
    ///
    /// # Errors
    ///
    /// [`MobilityError::FleetSizeMismatch`] if `next` does not hold exactly
    /// one record per vehicle.  The fleet is left untouched in that case.
    pub fn commit_tick(&mut self, next: Vec<Vehicle>) -> MobilityResult<Vec<VehicleId>> {
        if next.len() != self.vehicles.len() {
            return Err(MobilityError::FleetSizeMismatch {
                expected: self.vehicles.len(),
                got:      next.len(),
            });
        }

        let arrived: Vec<VehicleId> = self
            .vehicles
            .iter()
            .zip(&next)
            .filter(|(before, after)| {
                before.is_enroute() && after.state == VehicleState::Arrived
            })
            .map(|(_, after)| after.id.clone())
            .collect();

        for id in &arrived {
            debug!(vehicle = %id, "vehicle arrived");
        }

        self.vehicles = next;
        self.sync_units();
        Ok(arrived)
    }
}

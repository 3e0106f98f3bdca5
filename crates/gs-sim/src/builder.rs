//! Fluent builder for constructing a [`Sim`].

use gs_core::{SimConfig, SimRng};
use gs_grid::{LShapePreview, PreviewProvider, Router, StreetGrid};
use gs_mobility::{Fleet, VehicleUnit};
use tracing::info;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim<R>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: grid, speeds, seed, tick interval, …
/// - the seed units, e.g. from [`gs_mobility::load_units_csv`]
/// - `R: Router`: the route planner (e.g. [`gs_grid::ManhattanRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                  |
/// |-----------------|--------------------------|
/// | `.preview(p)`   | [`LShapePreview`]        |
///
/// # Example
///
/// ```rust,ignore
/// let units = load_units_csv(Path::new("units.csv"))?;
/// let mut sim = SimBuilder::new(SimConfig::default(), units, ManhattanRouter)
///     .build()?;
/// sim.request_route(&VehicleId::from("SUV-031"), GeoPoint::new(-58.35, -34.59))?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Router> {
    config:  SimConfig,
    units:   Vec<VehicleUnit>,
    router:  R,
    preview: Option<Box<dyn PreviewProvider>>,
}

impl<R: Router> SimBuilder<R> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, units: Vec<VehicleUnit>, router: R) -> Self {
        Self { config, units, router, preview: None }
    }

    /// Supply the provider used by [`Sim::preview_route`].
    pub fn preview(mut self, provider: impl PreviewProvider + 'static) -> Self {
        self.preview = Some(Box::new(provider));
        self
    }

    /// Validate the configuration, build the street grid, seed the fleet, and
    /// return a ready-to-run [`Sim`].
    ///
    /// Vehicle speeds are drawn from an RNG seeded with `config.seed`, so the
    /// same config and units always give the same fleet.
    pub fn build(self) -> SimResult<Sim<R>> {
        self.config.validate()?;

        let grid = StreetGrid::from_config(&self.config.grid)?;
        let mut rng = SimRng::new(self.config.seed);
        let fleet = Fleet::from_units(self.units, &grid, self.config.speed_range(), &mut rng)?;

        info!(
            vehicles      = fleet.len(),
            intersections = grid.intersection_count(),
            seed          = self.config.seed,
            "simulation built"
        );

        Ok(Sim {
            clock:   self.config.make_clock(),
            config:  self.config,
            grid,
            fleet,
            router:  self.router,
            preview: self.preview.unwrap_or_else(|| Box::new(LShapePreview::default())),
        })
    }
}

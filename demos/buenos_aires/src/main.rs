//! buenos_aires: the reference street-grid deployment.
//!
//! Loads the fifteen-unit Buenos Aires fleet (or a CSV of your own), books one
//! ride per unit to a set of landmarks, and drives the simulation either as
//! fast as possible or in real time at the configured tick interval.
//! Position snapshots and tick summaries are written as CSV; the final unit
//! positions are written as JSON.

mod seed;

use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use gs_core::{SimConfig, Tick, VehicleCategory, VehicleId, VehicleTypeId};
use gs_grid::ManhattanRouter;
use gs_mobility::{Fleet, VehicleUnit, load_units_csv, load_units_reader};
use gs_output::{CsvWriter, OutputWriter, SimOutputObserver};
use gs_sim::{IntervalDriver, SimBuilder, SimObserver, TickReport};

/// Street-grid vehicle simulation over central Buenos Aires.
#[derive(Parser)]
#[command(name = "buenos_aires")]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON configuration file (defaults reproduce the reference deployment)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Units CSV (`id,type_id,lng,lat[,address]`); the built-in fleet if omitted
    #[arg(short, long)]
    units: Option<PathBuf>,

    /// Directory for CSV/JSON output
    #[arg(short, long, default_value = "output/buenos_aires")]
    output: PathBuf,

    /// Override `total_ticks` from the configuration
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Tick at the configured wall-clock interval instead of flat out
    #[arg(long)]
    realtime: bool,
}

// ── Observer wrapper to count rows and arrivals ──────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    arrivals:      usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, arrivals: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_arrival(&mut self, tick: Tick, vehicle: &VehicleId) {
        self.arrivals += 1;
        info!(%vehicle, %tick, "ride complete");
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.summary_rows += 1;
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, fleet: &Fleet) {
        self.snapshot_rows += fleet.len();
        self.inner.on_snapshot(tick, fleet);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // 1. Configuration.
    let mut config = match &cli.config {
        Some(path) => SimConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(ticks) = cli.ticks {
        config.total_ticks = ticks;
    }

    // 2. Units.
    let units = match &cli.units {
        Some(path) => load_units_csv(path)
            .with_context(|| format!("loading units {}", path.display()))?,
        None => load_units_reader(Cursor::new(seed::UNITS_CSV))?,
    };
    info!(units = units.len(), "units loaded");

    // 3. Build sim.
    let mut sim = SimBuilder::new(config.clone(), units, ManhattanRouter).build()?;
    info!(
        lng_streets = sim.grid.lng_axis().len(),
        lat_streets = sim.grid.lat_axis().len(),
        "street grid ready"
    );

    // 4. A late addition: appears at the spawn point.
    sim.add_unit(VehicleUnit::new("VAN-999", VehicleTypeId::FuturisticElectricVan, 0.0, 0.0))?;

    for category in VehicleCategory::ALL {
        info!(%category, units = sim.fleet.units_in_category(category).count(), "fleet mix");
    }

    // 5. Book one ride per unit.
    let ids: Vec<VehicleId> = sim.fleet.iter().map(|v| v.id.clone()).collect();
    for (i, id) in ids.iter().enumerate() {
        let (name, destination) = seed::DESTINATIONS[i % seed::DESTINATIONS.len()];
        if let Some(preview) = sim.preview_route(id, destination)? {
            info!(
                vehicle = %id,
                to = name,
                km = %format!("{:.2}", preview.distance_km),
                minutes = %format!("{:.0}", preview.duration_minutes),
                "route preview"
            );
        }
        match sim.request_route(id, destination) {
            Ok(hops) => {
                let eta = sim.eta(id)?.map(|t| t.to_string()).unwrap_or_else(|| "-".into());
                info!(vehicle = %id, to = name, hops, %eta, "ride booked");
            }
            Err(e) => warn!(vehicle = %id, error = %e, "ride not booked"),
        }
    }

    // 6. Output.
    let writer = CsvWriter::new(&cli.output)
        .with_context(|| format!("creating output in {}", cli.output.display()))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer, &config));

    // 7. Run.
    let t0 = Instant::now();
    if cli.realtime {
        let driver = IntervalDriver::from_config(&config).max_ticks(config.total_ticks);
        driver.run(&mut sim, &mut obs)?;
        obs.inner.finish()?;
    } else {
        sim.run(&mut obs)?;
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        warn!(error = %e, "output incomplete");
    }

    // 8. Final unit positions.
    let json_path = cli.output.join("units.json");
    let file = File::create(&json_path)
        .with_context(|| format!("creating {}", json_path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), sim.fleet.units())?;

    // 9. Summary.
    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  vehicle_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv    : {} rows", obs.summary_rows);
    println!("  rides completed       : {} / {}", obs.arrivals, sim.fleet.len());
    println!();

    println!("{:<10} {:<28} {:<9} {:>11} {:>11}", "Unit", "Type", "State", "Lng", "Lat");
    println!("{}", "-".repeat(73));
    for (v, u) in sim.fleet.vehicles().iter().zip(sim.fleet.units()) {
        println!(
            "{:<10} {:<28} {:<9} {:>11.5} {:>11.5}",
            v.id.as_str(),
            v.type_id.as_str(),
            v.state.as_str(),
            u.lng,
            u.lat,
        );
    }

    Ok(())
}

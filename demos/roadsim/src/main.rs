//! roadsim — route vehicles over a road network and watch them drive.
//!
//! Loads a road CSV and a vehicle CSV (or the small built-in city when no
//! paths are given), prints the road map and every vehicle's shortest path,
//! then runs the tick simulation with a status report every
//! `--report-interval` seconds.
//!
//! ```text
//! cargo run -p roadsim -- --roads demos/roadsim/data/roads.csv \
//!                         --vehicles demos/roadsim/data/vehicles.csv
//! RUST_LOG=debug cargo run -p roadsim -- --tick-delay-ms 1000
//! ```

use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use rn_core::SimConfig;
use rn_fleet::{load_vehicles_csv, load_vehicles_reader, Vehicle, VehicleRegistry};
use rn_graph::{load_roads_csv, load_roads_reader, GraphResult, RoadGraph, Route, Router, ScanDijkstra};
use rn_output::{
    write_adjacency, write_route, write_vehicles, CsvStatusWriter, StatusObserver, Tee,
    TextStatusWriter,
};
use rn_sim::{Sim, SimBuilder, SimObserver, SimSummary};

// ── Built-in data ─────────────────────────────────────────────────────────────

const ROADS_CSV: &str = include_str!("../data/roads.csv");
const VEHICLES_CSV: &str = include_str!("../data/vehicles.csv");

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "roadsim")]
#[command(about = "Shortest-path routing and tick-based vehicle movement on a road network")]
struct Cli {
    /// Road CSV: from,to,travel_time per line after a header
    #[arg(long)]
    roads: Option<PathBuf>,

    /// Vehicle CSV: vehicle_id,start,end per line after a header
    #[arg(long)]
    vehicles: Option<PathBuf>,

    /// Print a status report every N ticks (0 disables reports)
    #[arg(long, default_value = "5")]
    report_interval: u64,

    /// Wall-clock delay between ticks, in milliseconds
    #[arg(long, default_value = "0")]
    tick_delay_ms: u64,

    /// Abort the run if it has not finished after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Also write every report row to this CSV file
    #[arg(long)]
    status_csv: Option<PathBuf>,
}

fn load_graph(cli: &Cli) -> Result<RoadGraph> {
    match &cli.roads {
        Some(path) => load_roads_csv(path).with_context(|| format!("loading roads from {}", path.display())),
        None => Ok(load_roads_reader(Cursor::new(ROADS_CSV))?),
    }
}

fn load_registry(cli: &Cli) -> Result<VehicleRegistry> {
    match &cli.vehicles {
        Some(path) => {
            load_vehicles_csv(path).with_context(|| format!("loading vehicles from {}", path.display()))
        }
        None => Ok(load_vehicles_reader(Cursor::new(VEHICLES_CSV))?),
    }
}

/// Route every vehicle once; the same results are printed and simulated.
fn route_all(graph: &RoadGraph, registry: &VehicleRegistry) -> Vec<(Vehicle, GraphResult<Route>)> {
    registry
        .iter()
        .map(|v| (v.clone(), ScanDijkstra.route(graph, v.start(), v.end())))
        .collect()
}

fn run<O: SimObserver>(mut sim: Sim<'_>, observer: &mut O) -> Result<SimSummary> {
    Ok(sim.run(observer)?)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let graph = load_graph(&cli)?;
    let registry = load_registry(&cli)?;
    info!(
        "loaded {} intersections, {} roads, {} vehicles",
        graph.node_count(),
        graph.edge_count(),
        registry.len()
    );

    let mut out = io::stdout().lock();

    // 1. Road map and vehicle list.
    writeln!(out, "Road Map:")?;
    write_adjacency(&mut out, &graph)?;
    if !registry.is_empty() {
        writeln!(out, "\nVehicles List:")?;
        write_vehicles(&mut out, &registry)?;
    }

    // 2. Shortest paths, computed once and handed to the simulation below.
    let routed = route_all(&graph, &registry);
    if !routed.is_empty() {
        writeln!(out, "\nShortest Paths for Vehicles:")?;
    }
    for (vehicle, route) in &routed {
        write_route(&mut out, vehicle, route)?;
    }
    out.flush()?;
    drop(out);

    // 3. Movement.
    let config = SimConfig {
        report_interval_ticks: cli.report_interval,
        tick_delay:            Duration::from_millis(cli.tick_delay_ms),
        max_ticks:             cli.max_ticks,
        ..SimConfig::default()
    };

    println!("\nReal-Time Vehicle Movement:");
    let text = StatusObserver::new(TextStatusWriter::new(io::stdout()), &config);
    let csv = match &cli.status_csv {
        Some(path) => Some(StatusObserver::new(
            CsvStatusWriter::create(path).with_context(|| format!("creating {}", path.display()))?,
            &config,
        )),
        None => None,
    };

    let sim = routed
        .into_iter()
        .fold(SimBuilder::new(config, &graph), |b, (vehicle, route)| b.journey(vehicle, route))
        .build()?;
    let t0 = Instant::now();

    let summary = match csv {
        Some(csv) => {
            let mut obs = Tee(text, csv);
            let summary = run(sim, &mut obs)?;
            if let Some(e) = obs.0.take_error().or_else(|| obs.1.take_error()) {
                return Err(e.into());
            }
            summary
        }
        None => {
            let mut obs = text;
            let summary = run(sim, &mut obs)?;
            if let Some(e) = obs.take_error() {
                return Err(e.into());
            }
            summary
        }
    };

    println!();
    println!(
        "Simulation finished at {} in {:.3} s: {} arrived, {} could not be routed",
        summary.final_tick,
        t0.elapsed().as_secs_f64(),
        summary.arrived,
        summary.excluded
    );
    Ok(())
}

//! bangalore — drive one simulated bus along an optimized Bangalore route.
//!
//! Optimizes the four-stop sample route (locally, or through a running
//! optimizer service with `--optimizer-url`), then ticks a session to the end
//! of the path, printing the dashboard and recording every snapshot to CSV.
//!
//! ```text
//! bangalore [--config sim.json] [--optimizer-url http://localhost:5000]
//!           [--speed 1..10] [--simplify 0.00001] [--realtime] [--out DIR]
//! ```
//!
//! `bangalore --help` lists the options.
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rsim_core::{SimConfig, Tick, Waypoint};
use rsim_optimizer::sample::sample_request;
use rsim_optimizer::{HttpOptimizer, Optimizer, OptimizerConfig, PassthroughOptimizer};
use rsim_output::{CsvSnapshotWriter, RecordingObserver};
use rsim_path::IndexedPath;
use rsim_sim::{
    DashboardView, ImmediatePacer, PositionSnapshot, RealTimePacer, RunOutcome, SessionObserver,
    SimulationSession,
};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_OUT_DIR:     &str = "output/bangalore";
const CONSOLE_EVERY_TICKS: u64  = 100; // 5 s of simulated time at 50 ms ticks

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(about = "Simulate a bus along an optimized Bangalore route")]
struct Args {
    /// JSON `SimConfig` file; defaults apply to missing fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL of a running optimizer service.  Without it the stops are
    /// kept in sample order and joined by straight lines.
    #[arg(long)]
    optimizer_url: Option<String>,

    /// Speed multiplier, 1 to 10.  Overrides the config file.
    #[arg(long)]
    speed: Option<f64>,

    /// Douglas–Peucker tolerance in degrees (e.g. 0.00001).
    #[arg(long)]
    simplify: Option<f64>,

    /// Sleep one tick interval between ticks.
    #[arg(long)]
    realtime: bool,

    /// Directory for `snapshots.csv` and `runs.csv`.
    #[arg(long = "out", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints the dashboard every few seconds and forwards everything to the CSV
/// recorder.
struct ConsoleObserver {
    route:    Vec<Waypoint>,
    recorder: RecordingObserver<CsvSnapshotWriter>,
}

impl ConsoleObserver {
    fn print(&self, tick: Tick, view: &DashboardView) {
        println!("── {tick} ──");
        println!("{view}");
    }
}

impl SessionObserver for ConsoleObserver {
    fn on_start(&mut self, tick: Tick, snapshot: Option<&PositionSnapshot>) {
        self.print(tick, &DashboardView::from_latest(snapshot, &self.route));
        self.recorder.on_start(tick, snapshot);
    }

    fn on_snapshot(&mut self, tick: Tick, snapshot: &PositionSnapshot) -> ControlFlow<()> {
        if tick.0.is_multiple_of(CONSOLE_EVERY_TICKS) {
            self.print(tick, &DashboardView::new(snapshot, &self.route));
        }
        self.recorder.on_snapshot(tick, snapshot)
    }

    fn on_complete(&mut self, final_tick: Tick) {
        println!("── {final_tick} ── arrived at final destination");
        self.recorder.on_complete(final_tick);
    }

    fn on_stop(&mut self, final_tick: Tick) {
        println!("── {final_tick} ── stopped");
        self.recorder.on_stop(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // 1. Config.
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => SimConfig::default(),
    };
    if let Some(speed) = args.speed {
        config.speed_multiplier = speed;
    }
    config.validate()?;

    // 2. Optimize.
    let optimizer: Box<dyn Optimizer> = match &args.optimizer_url {
        Some(url) => Box::new(HttpOptimizer::new(&OptimizerConfig::with_base_url(url.as_str()))?),
        None => Box::new(PassthroughOptimizer),
    };
    let request = sample_request();
    let response = optimizer.optimize(&request).context("route optimization failed")?;

    println!("=== bangalore — route simulation ===");
    for (i, stop) in response.route.iter().enumerate() {
        println!("  {i}. {stop}");
    }
    if let Some(m) = response.total_distance {
        println!("Optimized distance: {:.2} km", m / 1_000.0);
    }

    // 3. Path.
    let mut path = IndexedPath::new(response.path_coordinates);
    if !path.is_simulatable() {
        warn!("optimizer returned no usable geometry; connecting stops directly");
        path = IndexedPath::from_waypoints(&response.route);
    }
    if let Some(tolerance) = args.simplify {
        let before = path.points().len();
        path = path.simplified(tolerance)?;
        info!(before, after = path.points().len(), tolerance, "path simplified");
    }
    println!("Path: {} points, {:.3} km", path.points().len(), path.total_km());
    println!();

    // 4. Output.
    let out_dir = args.out_dir;
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let writer = CsvSnapshotWriter::new(&out_dir)?;

    // 5. Run.
    let route = response.route;
    let mut obs = ConsoleObserver {
        route:    route.clone(),
        recorder: RecordingObserver::new(writer, &config),
    };
    let mut session = SimulationSession::new(route, path, &config)?;

    let t0 = Instant::now();
    let outcome = if args.realtime {
        session.run(&mut RealTimePacer, &mut obs)
    } else {
        session.run(&mut ImmediatePacer, &mut obs)
    };
    let elapsed = t0.elapsed();

    if let Some(e) = obs.recorder.take_error() {
        eprintln!("output error: {e}");
    }
    obs.recorder.finish().context("closing output files")?;

    // 6. Summary.
    println!();
    match outcome {
        RunOutcome::Completed { ticks } => println!("Completed in {ticks} ticks"),
        RunOutcome::Stopped { ticks } => println!("Stopped after {ticks} ticks"),
    }
    println!("Wall time: {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {}/snapshots.csv : {} rows",
        out_dir.display(),
        obs.recorder.rows_written()
    );

    Ok(())
}

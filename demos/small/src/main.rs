//! small: one day of emergency calls across six zones and three depots.
//!
//! Runs the day on a worker thread, pauses it part-way to print the live
//! depot board, then resumes to the end.  Finishes with a handful of
//! independent replications to show how much the served ratio moves with
//! the seed.
//!
//! Set `RUST_LOG=debug` to see every dispatch decision.

use std::time::{Duration, Instant};

use anyhow::Result;

use ems_core::{CoverageMatrix, DepotId, SimConfig, TimeMatrix};
use ems_dispatch::NearestAvailable;
use ems_mission::MissionLogEntry;
use ems_sim::{EngineBuilder, RunState, SimNotification, SimulationController, run_replications};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64   = 42;
const CALLS_PER_HOUR:  f64   = 12.0;
const PAUSE_AFTER:     u64   = 100;  // events processed before the mid-run pause
const MAX_RESPONSE:    f64   = 10.0; // minutes; a depot covers a zone within this
const FLEET:           [u32; 3] = [2, 3, 1];
const REPLICATIONS:    u64   = 8;

// ── Scenario ──────────────────────────────────────────────────────────────────

/// Travel minutes, zone rows × depot columns.
const TRAVEL: [[f64; 3]; 6] = [
    [3.0, 12.0, 18.0],
    [6.0, 7.0, 15.0],
    [11.0, 4.0, 9.0],
    [14.0, 5.0, 6.0],
    [17.0, 9.0, 2.5],
    [9.0, 13.0, 8.0],
];

fn matrices() -> Result<(CoverageMatrix, TimeMatrix)> {
    let rows: Vec<Vec<f64>> = TRAVEL.iter().map(|r| r.to_vec()).collect();
    let coverage = rows
        .iter()
        .map(|r| r.iter().map(|&t| t <= MAX_RESPONSE).collect())
        .collect();
    Ok((CoverageMatrix::from_rows(coverage)?, TimeMatrix::from_rows(rows)?))
}

fn builder(
    seed:     u64,
    coverage: &CoverageMatrix,
    times:    &TimeMatrix,
) -> EngineBuilder<NearestAvailable> {
    let config = SimConfig::default().with_hourly_rate(CALLS_PER_HOUR).with_seed(seed);
    EngineBuilder::new(config, coverage.clone(), times.clone(), FLEET.to_vec(), NearestAvailable)
}

fn print_board(ctl: &SimulationController<NearestAvailable>) {
    println!("{:<8} {:>5} {:>5}  {}", "Depot", "Free", "Total", "Status");
    println!("{}", "-".repeat(32));
    for (i, a) in ctl.availability_all().iter().enumerate() {
        println!("{:<8} {:>5} {:>5}  {:?}", DepotId(i as u32).to_string(), a.available, a.capacity, a.status());
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== small: ems dispatch simulator ===");
    println!(
        "Zones: {}  |  Depots: {}  |  Calls/h: {CALLS_PER_HOUR}  |  Seed: {SEED}",
        TRAVEL.len(),
        FLEET.len()
    );
    println!();

    // 1. Threaded run with a mid-run pause.
    let (coverage, times) = matrices()?;
    let engine = builder(SEED, &coverage, &times).build()?;
    let mut ctl = SimulationController::new(engine);
    let rx = ctl.start()?;

    let t0 = Instant::now();
    let mut paused_once = false;
    let mut blocked = Vec::new();
    for note in rx.iter() {
        match note {
            SimNotification::Entry(entry @ MissionLogEntry::Blocked { .. }) => blocked.push(entry),
            SimNotification::Entry(MissionLogEntry::HandlerError { message, .. }) => {
                log::warn!("handler error: {message}");
            }
            SimNotification::Entry(_) => {}
            SimNotification::Progress(p) if !paused_once && p.processed >= PAUSE_AFTER => {
                paused_once = true;
                ctl.pause();
                ctl.control().wait_for(Duration::from_secs(5), |s| s == RunState::Paused);
                println!(
                    "Paused after {} of {} events ({:.0}%):",
                    p.processed,
                    p.total,
                    100.0 * p.fraction()
                );
                print_board(&ctl);
                println!();
                ctl.resume();
            }
            SimNotification::Progress(_) => {}
            SimNotification::Finished(state) => log::info!("worker finished: {state:?}"),
        }
    }
    let report = ctl.join()?;
    let elapsed = t0.elapsed();

    // 2. Summary.
    let s = report.summary();
    println!("Run {:?} at {} in {:.3} s", report.state, report.final_time, elapsed.as_secs_f64());
    println!("  incidents  : {}", s.arrivals);
    println!("  dispatched : {}", s.dispatched);
    println!("  blocked    : {}", s.blocked);
    println!("  completed  : {}", s.completed);
    if let Some(ratio) = s.served_ratio() {
        println!("  served     : {:.1}%", 100.0 * ratio);
    }
    for entry in blocked.iter().take(5) {
        println!("    {entry}");
    }
    println!();

    // 3. Replications.
    let seeds: Vec<u64> = (1..=REPLICATIONS).collect();
    let reps = run_replications(&seeds, |seed| builder(seed, &coverage, &times).build())?;
    println!("{:<6} {:>9} {:>8} {:>8}", "Seed", "Incidents", "Blocked", "Served");
    println!("{}", "-".repeat(34));
    for r in &reps {
        println!(
            "{:<6} {:>9} {:>8} {:>7.1}%",
            r.seed,
            r.summary.arrivals,
            r.summary.blocked,
            100.0 * r.summary.served_ratio().unwrap_or(1.0)
        );
    }

    Ok(())
}

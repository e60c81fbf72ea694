//! silicon-defender: headless SILICON DEFENDER session runner.
//!
//! Usage:
//!   silicon-defender simulate --catalog defects.json [--config tuning.json] [--seed N] [--ticks N]
//!   silicon-defender run --catalog defects.json [--config tuning.json] [--seed N] [--ticks N]

use std::process;
use std::time::Duration;

use log::{debug, error, info};

use silicon_app::autopilot::Autopilot;
use silicon_app::control;
use silicon_app::state::AppState;
use silicon_core::catalog::DefectCatalog;
use silicon_core::commands::PlayerCommand;
use silicon_core::config::Tuning;
use silicon_core::constants::{DEFAULT_SEED, DT, TICK_RATE};
use silicon_core::enums::GamePhase;
use silicon_core::events::SimEvent;
use silicon_core::state::SessionSnapshot;
use silicon_core::types::Vec3;
use silicon_sim::engine::{SimConfig, SimulationEngine};

/// Parsed command-line options shared by both commands.
struct Options {
    catalog: String,
    config: Option<String>,
    seed: u64,
    ticks: u64,
    interval: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let result = match args[1].as_str() {
        "simulate" => parse_options(&args[2..]).and_then(|opts| cmd_simulate(&opts)),
        "run" => parse_options(&args[2..]).and_then(|opts| cmd_run(&opts)),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(message) = result {
        error!("{message}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "silicon-defender: headless SILICON DEFENDER runner\n\
         \n\
         Commands:\n\
         \n\
         simulate  Run an autopilot session as fast as possible and print the\n\
                   final snapshot as JSON\n\
         run       Run an autopilot session in real time on the game loop thread\n\
         \n\
           --catalog <path>   Defect catalog JSON file (required)\n\
           --config <path>    Tuning JSON file (optional, default: built-in)\n\
           --seed <N>         RNG seed (default: {DEFAULT_SEED})\n\
           --ticks <N>        Frames to run (default: 1800)\n\
           --interval <N>     Frames between autopilot shots (default: 15)\n\
         \n\
         Set RUST_LOG=debug to see every kill, discovery and hit.\n"
    );
}

fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut catalog = None;
    let mut opts = Options {
        catalog: String::new(),
        config: None,
        seed: DEFAULT_SEED,
        ticks: 1800,
        interval: 15,
    };

    let mut iter = args.iter();
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} requires a value"))
        };
        match flag.as_str() {
            "--catalog" => catalog = Some(value()?),
            "--config" => opts.config = Some(value()?),
            "--seed" => opts.seed = parse_number(flag, &value()?)?,
            "--ticks" => opts.ticks = parse_number(flag, &value()?)?,
            "--interval" => opts.interval = parse_number(flag, &value()?)?,
            other => return Err(format!("Unknown option: {other}")),
        }
    }

    opts.catalog = catalog.ok_or("--catalog is required")?;
    Ok(opts)
}

fn parse_number(flag: &str, value: &str) -> Result<u64, String> {
    value
        .parse()
        .map_err(|_| format!("{flag} expects a non-negative integer, got `{value}`"))
}

/// Load the catalog and tuning files and build an engine.
fn build_engine(opts: &Options) -> Result<SimulationEngine, String> {
    let catalog = DefectCatalog::from_json_file(&opts.catalog)
        .map_err(|e| format!("Failed to load catalog {}: {e}", opts.catalog))?;
    let tuning = match &opts.config {
        Some(path) => {
            Tuning::from_json_file(path).map_err(|e| format!("Failed to load config {path}: {e}"))?
        }
        None => Tuning::default(),
    };
    info!(
        "Loaded {} defect types from {} (seed {})",
        catalog.len(),
        opts.catalog,
        opts.seed
    );
    Ok(SimulationEngine::new(
        SimConfig {
            seed: opts.seed,
            tuning,
        },
        catalog,
    ))
}

/// Log what happened this frame.
fn report(snapshot: &SessionSnapshot) {
    for event in &snapshot.events {
        match event {
            SimEvent::Score {
                amount, defect_id, ..
            } => debug!("Destroyed {defect_id} (+{amount})"),
            SimEvent::PlayerHit { enemy } => debug!(
                "Hit by enemy {} (health {}/{})",
                enemy.0, snapshot.player.health, snapshot.player.max_health
            ),
        }
    }
    for discovery in &snapshot.discoveries {
        info!("New defect discovered: {}: {}", discovery.name, discovery.description);
        if !discovery.explanation.is_empty() {
            info!("  {}", discovery.explanation);
        }
    }
}

fn cmd_simulate(opts: &Options) -> Result<(), String> {
    let mut engine = build_engine(opts)?;
    let mut pilot = Autopilot::new(opts.interval);
    engine.queue_command(PlayerCommand::StartSession);

    let mut snapshot = engine.tick(DT, Vec3::ZERO);
    for _ in 1..opts.ticks {
        if !snapshot.phase.is_playing() {
            break;
        }
        if let Some(cmd) = pilot.next_command(&snapshot) {
            engine.queue_command(cmd);
        }
        snapshot = engine.tick(DT, Vec3::ZERO);
        report(&snapshot);
    }

    info!(
        "Finished in phase {:?}: {} points, {} defects destroyed, {} types discovered",
        snapshot.phase,
        snapshot.score.points,
        snapshot.score.defects_destroyed,
        snapshot.score.discovered.len()
    );
    let json = serde_json::to_string_pretty(&snapshot)
        .map_err(|e| format!("Failed to serialize snapshot: {e}"))?;
    println!("{json}");
    Ok(())
}

fn cmd_run(opts: &Options) -> Result<(), String> {
    let engine = build_engine(opts)?;
    let state = AppState::new();
    control::start_simulation(&state, engine, |snapshot: &SessionSnapshot| report(snapshot))
        .map_err(|e| e.to_string())?;
    control::send_command(&state, PlayerCommand::StartSession).map_err(|e| e.to_string())?;

    let mut pilot = Autopilot::new(opts.interval);
    let frame = Duration::from_secs(1) / TICK_RATE;
    let last = loop {
        std::thread::sleep(frame);
        let Some(snapshot) = control::get_snapshot(&state).map_err(|e| e.to_string())? else {
            continue;
        };
        if snapshot.time.tick >= opts.ticks || snapshot.phase == GamePhase::GameOver {
            break snapshot;
        }
        if let Some(cmd) = pilot.next_command(&snapshot) {
            control::send_command(&state, cmd).map_err(|e| e.to_string())?;
        }
    };

    control::stop_simulation(&state).map_err(|e| e.to_string())?;
    info!(
        "Stopped at tick {} in phase {:?}: {} points, health {}/{}",
        last.time.tick,
        last.phase,
        last.score.points,
        last.player.health,
        last.player.max_health
    );
    Ok(())
}

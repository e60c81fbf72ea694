//! Game loop thread: runs the simulation engine at 60Hz and emits snapshots.
//!
//! The engine is moved into this thread and owned there exclusively.
//! Commands arrive via `mpsc` channel. Snapshots go to a `SnapshotSink` and
//! are stored in shared state for synchronous polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{info, warn};

use silicon_core::constants::{DT, TICK_RATE};
use silicon_core::state::SessionSnapshot;
use silicon_core::types::Vec3;
use silicon_sim::engine::SimulationEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one frame.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Receives every snapshot the game loop produces (renderer, UI bridge, log).
pub trait SnapshotSink: Send + 'static {
    fn emit(&mut self, snapshot: &SessionSnapshot);
}

/// Discards snapshots; for hosts that only poll.
pub struct NullSink;

impl SnapshotSink for NullSink {
    fn emit(&mut self, _snapshot: &SessionSnapshot) {}
}

impl<F> SnapshotSink for F
where
    F: FnMut(&SessionSnapshot) + Send + 'static,
{
    fn emit(&mut self, snapshot: &SessionSnapshot) {
        self(snapshot)
    }
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the control layer and the thread handle.
pub fn spawn_game_loop<S: SnapshotSink>(
    engine: SimulationEngine,
    sink: S,
    latest_snapshot: Arc<Mutex<Option<SessionSnapshot>>>,
) -> io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("silicon-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, sink, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop<S: SnapshotSink>(
    mut engine: SimulationEngine,
    mut sink: S,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SessionSnapshot>>,
) {
    let mut player_position = Vec3::ZERO;
    let mut next_tick_time = Instant::now();
    info!("Game loop started at {TICK_RATE}Hz");

    loop {
        // 1. Drain all pending commands
        if !drain_commands(&mut engine, &cmd_rx, &mut player_position) {
            info!("Game loop stopped after {} ticks", engine.time().tick);
            return;
        }

        // 2. Advance one frame (engine handles pause semantics internally)
        let snapshot = engine.tick(DT, player_position);

        // 3. Hand the snapshot to the sink
        sink.emit(&snapshot);

        // 4. Store latest snapshot for synchronous polling
        match latest_snapshot.lock() {
            Ok(mut lock) => *lock = Some(snapshot),
            Err(_) => warn!("Snapshot lock poisoned; dropping frame"),
        }

        // 5. Sleep until next frame
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind, reset to avoid catch-up spiral
            warn!("Game loop fell behind by {:?}", now - next_tick_time);
            next_tick_time = now;
        }
    }
}

/// Forward every pending command to the engine.
/// Returns false when the loop should stop.
fn drain_commands(
    engine: &mut SimulationEngine,
    cmd_rx: &mpsc::Receiver<GameLoopCommand>,
    player_position: &mut Vec3,
) -> bool {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
            Ok(GameLoopCommand::SetPlayerPosition(position)) => *player_position = position,
            Ok(GameLoopCommand::Shutdown) => return false,
            Err(mpsc::TryRecvError::Empty) => return true,
            Err(mpsc::TryRecvError::Disconnected) => return false,
        }
    }
}

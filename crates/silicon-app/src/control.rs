//! Control surface for a running simulation.
//!
//! These functions are what a UI layer calls: start the game loop, forward
//! player input, poll the latest snapshot, stop. They bridge callers to the
//! game loop thread via channels.

use silicon_core::commands::PlayerCommand;
use silicon_core::state::SessionSnapshot;
use silicon_core::types::Vec3;
use silicon_sim::engine::SimulationEngine;

use crate::game_loop::{self, SnapshotSink};
use crate::state::{AppState, GameLoopCommand};

/// Errors from the control surface.
#[derive(thiserror::Error, Debug)]
pub enum ControlError {
    #[error("Simulation already running")]
    AlreadyRunning,

    #[error("Simulation not started")]
    NotStarted,

    #[error("Game loop has stopped")]
    LoopStopped,

    #[error("Shared state lock poisoned")]
    Poisoned,

    #[error("Failed to spawn game loop thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation<S: SnapshotSink>(
    state: &AppState,
    engine: SimulationEngine,
    sink: S,
) -> Result<(), ControlError> {
    let mut tx_lock = state.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
    if tx_lock.is_some() {
        return Err(ControlError::AlreadyRunning);
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(engine, sink, state.latest_snapshot.clone())?;

    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| ControlError::Poisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), ControlError> {
    send(state, GameLoopCommand::PlayerCommand(command))
}

/// Report the player's current position.
pub fn set_player_position(state: &AppState, position: Vec3) -> Result<(), ControlError> {
    send(state, GameLoopCommand::SetPlayerPosition(position))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<SessionSnapshot>, ControlError> {
    let lock = state.latest_snapshot.lock().map_err(|_| ControlError::Poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread to finish.
pub fn stop_simulation(state: &AppState) -> Result<(), ControlError> {
    let tx = state
        .command_tx
        .lock()
        .map_err(|_| ControlError::Poisoned)?
        .take()
        .ok_or(ControlError::NotStarted)?;
    // A send failure means the loop already exited; joining is still correct.
    let _ = tx.send(GameLoopCommand::Shutdown);

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| ControlError::Poisoned)?
        .take();
    if let Some(handle) = handle {
        handle.join().map_err(|_| ControlError::LoopStopped)?;
    }
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<(), ControlError> {
    let tx_lock = state.command_tx.lock().map_err(|_| ControlError::Poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| ControlError::LoopStopped),
        None => Err(ControlError::NotStarted),
    }
}

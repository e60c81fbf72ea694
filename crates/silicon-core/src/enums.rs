//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for a session to start.
    #[default]
    Menu,
    /// Session running; the simulation step executes every frame.
    Playing,
    /// Session suspended; entities are frozen.
    Paused,
    /// Player health reached zero.
    GameOver,
}

impl GamePhase {
    /// Whether the simulation step should run this frame.
    pub fn is_playing(self) -> bool {
        self == GamePhase::Playing
    }
}

//! Player commands sent from the host to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::types::Vec3;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start a new session, discarding any previous one.
    StartSession,
    /// Fire a projectile. Both vectors are in world space; `direction`
    /// need not be normalized but must be non-zero.
    Shoot { origin: Vec3, direction: Vec3 },
    /// Suspend the running session.
    Pause,
    /// Continue a paused session.
    Resume,
    /// Leave a finished or paused session.
    ReturnToMenu,
}

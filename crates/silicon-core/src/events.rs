//! Events emitted by the simulation for the surrounding application.

use serde::{Deserialize, Serialize};

use crate::types::{Color, DefectId, EntityId, Vec3};

/// Outcome of a single simulation step, in the order it happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// An enemy with a known defect type was destroyed.
    Score {
        amount: u32,
        defect_id: DefectId,
        /// Where the enemy was when it was destroyed.
        position: Vec3,
    },
    /// An enemy in contact range damaged the player.
    PlayerHit { enemy: EntityId },
}

/// Educational notification for the first kill of a defect type in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub defect_id: DefectId,
    pub name: String,
    pub description: String,
    pub explanation: String,
    pub color: Color,
    pub score_value: u32,
}

//! Session snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::{Discovery, SimEvent};
use crate::types::{Color, DefectId, EntityId, SimTime, Vec3};

/// Complete session state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub score: ScoreView,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
    pub particles: Vec<ParticleView>,
    /// Events produced during this tick only.
    pub events: Vec<SimEvent>,
    /// Defect types destroyed for the first time during this tick.
    pub discoveries: Vec<Discovery>,
}

/// Player status for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
}

/// Running score for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub points: u64,
    pub defects_destroyed: u32,
    pub shots_fired: u32,
    /// Distinct defect types destroyed this session, in discovery order.
    pub discovered: Vec<DefectId>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: EntityId,
    pub position: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EntityId,
    pub position: Vec3,
    pub defect_id: DefectId,
    /// Display color from the catalog; white when the id does not resolve.
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Vec3,
    pub color: Color,
    /// Remaining lifetime, usable as opacity.
    pub lifetime: f32,
}

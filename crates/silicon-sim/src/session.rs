//! Session bookkeeping owned by the engine, not by the step.

use std::collections::HashSet;

use silicon_core::types::{DefectId, Vec3};

/// Running score for the current session.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub points: u64,
    pub defects_destroyed: u32,
    pub shots_fired: u32,
    /// Defect types destroyed at least once, in discovery order.
    pub discovered: Vec<DefectId>,
    discovered_set: HashSet<DefectId>,
}

impl ScoreState {
    /// Record a destroyed defect. Returns true the first time a type is seen.
    pub fn record_kill(&mut self, defect_id: &DefectId, amount: u32) -> bool {
        self.points += u64::from(amount);
        self.defects_destroyed += 1;
        if self.discovered_set.insert(defect_id.clone()) {
            self.discovered.push(defect_id.clone());
            true
        } else {
            false
        }
    }

    pub fn is_discovered(&self, defect_id: &DefectId) -> bool {
        self.discovered_set.contains(defect_id)
    }
}

/// The player as seen by the session.
#[derive(Debug, Clone, Default)]
pub struct PlayerState {
    pub position: Vec3,
    pub health: u32,
    pub max_health: u32,
}

impl PlayerState {
    pub fn new(max_health: u32) -> Self {
        Self {
            position: Vec3::ZERO,
            health: max_health,
            max_health,
        }
    }

    /// Apply damage, saturating at zero. Returns true if the player is down.
    pub fn take_damage(&mut self, amount: u32) -> bool {
        self.health = self.health.saturating_sub(amount);
        self.health == 0
    }
}

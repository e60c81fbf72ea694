//! Entity collections for one play session.

use silicon_core::components::{Enemy, Particle, Projectile};
use silicon_core::types::EntityId;

/// Every transient entity in the session, plus the id counter they share.
///
/// Collections keep insertion order; systems scan them in that order so
/// results are stable for a given seed.
#[derive(Debug, Clone, Default)]
pub struct WorldState {
    pub projectiles: Vec<Projectile>,
    pub enemies: Vec<Enemy>,
    pub particles: Vec<Particle>,
    /// Next id to hand out. Never reused within a session.
    pub next_id: EntityId,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a fresh entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        self.next_id.next()
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn projectile(&self, id: EntityId) -> Option<&Projectile> {
        self.projectiles.iter().find(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.projectiles.is_empty() && self.enemies.is_empty() && self.particles.is_empty()
    }
}

//! Entity data for the three transient entity kinds.
//!
//! These are plain data structs with no methods.
//! Game logic lives in the sim crate's systems, not here.

use serde::{Deserialize, Serialize};

use crate::types::{Color, DefectId, EntityId, Vec3};

/// A shot fired by the player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec3,
    /// Units per second.
    pub velocity: Vec3,
}

/// An in-world instance of a defect type the player can destroy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
    /// Zero for every spawned enemy; enemies are not moved by the step.
    pub velocity: Vec3,
    /// Key into the defect catalog.
    pub defect_id: DefectId,
}

/// A short-lived visual fragment from a destroyed enemy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: EntityId,
    pub position: Vec3,
    pub velocity: Vec3,
    /// Remaining lifetime; the particle is removed once this is <= 0.
    pub lifetime: f32,
    pub color: Color,
}

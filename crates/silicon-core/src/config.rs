//! Tunable gameplay parameters and loading of external data files.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Errors from loading the catalog or tuning files.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Well-formed but unusable data
    #[error("Invalid data: {0}")]
    Invalid(String),
}

/// Every gameplay tunable the simulation step and session layer read.
///
/// Missing fields in a tuning file fall back to the defaults in
/// [`constants`](crate::constants).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub projectile_speed: f32,
    pub projectile_max_range: f32,
    pub projectile_spawn_offset: f32,
    pub hit_radius: f32,
    pub contact_radius: f32,
    /// Probability in 0.0 - 1.0.
    pub contact_damage_chance: f32,
    pub particle_burst_count: usize,
    pub particle_lifetime: f32,
    pub particle_decay_rate: f32,
    pub particle_min_speed: f32,
    pub particle_max_speed: f32,
    pub initial_enemy_count: usize,
    pub enemy_population_floor: usize,
    pub spawn_half_extent: f32,
    pub player_max_health: u32,
    pub player_hit_damage: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            projectile_speed: PROJECTILE_SPEED,
            projectile_max_range: PROJECTILE_MAX_RANGE,
            projectile_spawn_offset: PROJECTILE_SPAWN_OFFSET,
            hit_radius: HIT_RADIUS,
            contact_radius: CONTACT_RADIUS,
            contact_damage_chance: CONTACT_DAMAGE_CHANCE,
            particle_burst_count: PARTICLE_BURST_COUNT,
            particle_lifetime: PARTICLE_LIFETIME,
            particle_decay_rate: PARTICLE_DECAY_RATE,
            particle_min_speed: PARTICLE_MIN_SPEED,
            particle_max_speed: PARTICLE_MAX_SPEED,
            initial_enemy_count: INITIAL_ENEMY_COUNT,
            enemy_population_floor: ENEMY_POPULATION_FLOOR,
            spawn_half_extent: SPAWN_HALF_EXTENT,
            player_max_health: PLAYER_MAX_HEALTH,
            player_hit_damage: PLAYER_HIT_DAMAGE,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a JSON tuning file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), LoadError> {
        let positive = [
            ("projectile_speed", self.projectile_speed),
            ("projectile_max_range", self.projectile_max_range),
            ("hit_radius", self.hit_radius),
            ("particle_lifetime", self.particle_lifetime),
            ("particle_decay_rate", self.particle_decay_rate),
            ("particle_max_speed", self.particle_max_speed),
            ("spawn_half_extent", self.spawn_half_extent),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(LoadError::Invalid(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        let non_negative = [
            ("contact_radius", self.contact_radius),
            ("projectile_spawn_offset", self.projectile_spawn_offset),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(LoadError::Invalid(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&self.contact_damage_chance) {
            return Err(LoadError::Invalid(format!(
                "contact_damage_chance must be within 0.0 - 1.0, got {}",
                self.contact_damage_chance
            )));
        }
        if !(0.0..self.particle_max_speed).contains(&self.particle_min_speed) {
            return Err(LoadError::Invalid(format!(
                "particle_min_speed must be within 0.0 - particle_max_speed, got {}",
                self.particle_min_speed
            )));
        }
        if self.player_max_health == 0 {
            return Err(LoadError::Invalid(
                "player_max_health must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Simulation constants and default tuning parameters.
//!
//! Every value here is the default for the matching field of
//! [`Tuning`](crate::config::Tuning); the sim reads tunables from
//! the config, never from these constants directly.

/// Frame rate the host drives the simulation at (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal tick rate.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Default RNG seed for a session.
pub const DEFAULT_SEED: u64 = 42;

// --- Projectiles ---

/// Projectile speed (units per second).
pub const PROJECTILE_SPEED: f32 = 80.0;

/// Distance from the origin beyond which a projectile is culled.
pub const PROJECTILE_MAX_RANGE: f32 = 200.0;

/// Distance in front of the shooter at which a projectile appears.
pub const PROJECTILE_SPAWN_OFFSET: f32 = 0.5;

// --- Collision ---

/// Projectile-enemy distance below which a hit is registered.
pub const HIT_RADIUS: f32 = 1.5;

/// Player-enemy distance below which contact damage may occur.
pub const CONTACT_RADIUS: f32 = 2.0;

/// Chance per frame, per enemy in contact range, that the player is hit.
pub const CONTACT_DAMAGE_CHANCE: f32 = 0.02;

// --- Particles ---

/// Particles spawned per destroyed enemy.
pub const PARTICLE_BURST_COUNT: usize = 12;

/// Initial particle lifetime (abstract units, 1.0 = full).
pub const PARTICLE_LIFETIME: f32 = 1.0;

/// Lifetime lost per second.
pub const PARTICLE_DECAY_RATE: f32 = 2.0;

/// Slowest outward particle speed (units per second).
pub const PARTICLE_MIN_SPEED: f32 = 2.0;

/// Fastest outward particle speed (units per second, exclusive).
pub const PARTICLE_MAX_SPEED: f32 = 8.0;

// --- Enemy population ---

/// Enemies batch-spawned at session start.
pub const INITIAL_ENEMY_COUNT: usize = 15;

/// The step respawns enemies one at a time while the live count is below this.
pub const ENEMY_POPULATION_FLOOR: usize = 5;

/// Half the edge length of the cube enemies spawn in, centered on the origin.
pub const SPAWN_HALF_EXTENT: f32 = 40.0;

// --- Player ---

/// Player health at session start.
pub const PLAYER_MAX_HEALTH: u32 = 100;

/// Health lost per contact hit.
pub const PLAYER_HIT_DAMAGE: u32 = 5;

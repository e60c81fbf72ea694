//! Entity spawn factories.
//!
//! Creates projectiles, enemies and particle bursts with the ids and
//! initial state the systems expect.

use rand::Rng;

use silicon_core::catalog::DefectCatalog;
use silicon_core::components::{Enemy, Particle, Projectile};
use silicon_core::config::Tuning;
use silicon_core::types::{Color, DefectId, EntityId, Vec3};

use crate::world::WorldState;

/// Set up a fresh session: batch-spawn the initial enemy population.
/// Returns the number of enemies spawned (zero for an empty catalog).
pub fn setup_session<R: Rng + ?Sized>(
    world: &mut WorldState,
    rng: &mut R,
    catalog: &DefectCatalog,
    tuning: &Tuning,
) -> usize {
    (0..tuning.initial_enemy_count)
        .filter_map(|_| spawn_random_enemy(world, rng, catalog, tuning))
        .count()
}

/// Fire a projectile from `origin` along `direction`.
///
/// The projectile appears a short distance ahead of the origin and travels
/// at the tuned speed. A zero-length direction fires nothing.
pub fn spawn_projectile(
    world: &mut WorldState,
    tuning: &Tuning,
    origin: Vec3,
    direction: Vec3,
) -> Option<EntityId> {
    let aim = direction.try_normalize()?;
    let id = world.allocate_id();
    world.projectiles.push(Projectile {
        id,
        position: origin + aim * tuning.projectile_spawn_offset,
        velocity: aim * tuning.projectile_speed,
    });
    Some(id)
}

/// Spawn a stationary enemy of the given defect type.
pub fn spawn_enemy(world: &mut WorldState, position: Vec3, defect_id: DefectId) -> EntityId {
    let id = world.allocate_id();
    world.enemies.push(Enemy {
        id,
        position,
        velocity: Vec3::ZERO,
        defect_id,
    });
    id
}

/// Spawn one enemy at a uniformly random point in the spawn cube, with a
/// defect type chosen uniformly from the catalog.
/// Does nothing if the catalog is empty.
pub fn spawn_random_enemy<R: Rng + ?Sized>(
    world: &mut WorldState,
    rng: &mut R,
    catalog: &DefectCatalog,
    tuning: &Tuning,
) -> Option<EntityId> {
    if catalog.is_empty() {
        return None;
    }
    let h = tuning.spawn_half_extent.abs();
    let position = Vec3::new(
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
        rng.gen_range(-h..=h),
    );
    let defect = catalog.get_index(rng.gen_range(0..catalog.len()))?;
    Some(spawn_enemy(world, position, defect.id.clone()))
}

/// Spawn a burst of particles flying outward from `position`.
///
/// Each particle gets a direction uniform over the unit sphere and a speed
/// uniform in `[particle_min_speed, particle_max_speed)`.
pub fn spawn_particle_burst<R: Rng + ?Sized>(
    world: &mut WorldState,
    rng: &mut R,
    tuning: &Tuning,
    position: Vec3,
    color: Color,
) {
    world.particles.reserve(tuning.particle_burst_count);
    for _ in 0..tuning.particle_burst_count {
        let z: f32 = rng.gen_range(-1.0..=1.0);
        let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        let direction = Vec3::new(ring * theta.cos(), ring * theta.sin(), z);
        let speed = if tuning.particle_min_speed < tuning.particle_max_speed {
            rng.gen_range(tuning.particle_min_speed..tuning.particle_max_speed)
        } else {
            tuning.particle_min_speed
        };

        let id = world.allocate_id();
        world.particles.push(Particle {
            id,
            position,
            velocity: direction * speed,
            lifetime: tuning.particle_lifetime,
            color,
        });
    }
}

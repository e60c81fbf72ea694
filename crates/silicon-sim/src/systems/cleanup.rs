//! Cleanup: removes projectiles that left the arena and expired particles.

use crate::world::WorldState;

/// Remove projectiles farther than `max_range` from the origin.
/// Returns how many were removed.
pub fn cull_projectiles(world: &mut WorldState, max_range: f32) -> usize {
    let range_sq = max_range * max_range;
    let before = world.projectiles.len();
    world
        .projectiles
        .retain(|p| p.position.length_squared() <= range_sq);
    before - world.projectiles.len()
}

/// Remove particles whose lifetime is zero or below.
pub fn remove_expired_particles(world: &mut WorldState) -> usize {
    let before = world.particles.len();
    world.particles.retain(|p| p.lifetime > 0.0);
    before - world.particles.len()
}

//! Population floor: tops the enemy count back up, one enemy per step.

use rand::Rng;

use silicon_core::catalog::DefectCatalog;
use silicon_core::config::Tuning;
use silicon_core::types::EntityId;

use crate::world::WorldState;
use crate::world_setup;

/// Spawn a single random enemy if the live count is below the floor.
/// Returns the new enemy's id, or `None` if nothing was spawned (count at
/// or above the floor, or an empty catalog).
pub fn run<R: Rng + ?Sized>(
    world: &mut WorldState,
    rng: &mut R,
    catalog: &DefectCatalog,
    tuning: &Tuning,
) -> Option<EntityId> {
    if world.enemies.len() >= tuning.enemy_population_floor {
        return None;
    }
    world_setup::spawn_random_enemy(world, rng, catalog, tuning)
}

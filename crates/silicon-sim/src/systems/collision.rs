//! Projectile-enemy collision: sphere proximity test and kill resolution.

use std::collections::HashSet;

use rand::Rng;

use silicon_core::catalog::DefectCatalog;
use silicon_core::config::Tuning;
use silicon_core::events::SimEvent;
use silicon_core::types::EntityId;

use crate::world::WorldState;
use crate::world_setup;

/// Run collision detection and resolve every hit.
///
/// Each projectile is matched against the first enemy, in collection order,
/// closer than `hit_radius` that no earlier projectile has already claimed
/// this step. Matched projectiles and enemies are removed. An enemy whose
/// defect type resolves in the catalog yields a `Score` event and a particle
/// burst; an unresolved one is removed silently.
///
/// Returns the number of enemies destroyed.
pub fn run<R: Rng + ?Sized>(
    world: &mut WorldState,
    tuning: &Tuning,
    catalog: &DefectCatalog,
    rng: &mut R,
    events: &mut Vec<SimEvent>,
) -> usize {
    let hit_radius_sq = tuning.hit_radius * tuning.hit_radius;
    let mut destroyed: HashSet<EntityId> = HashSet::new();
    // Enemy indices in the order they were hit.
    let mut kills: Vec<usize> = Vec::new();

    let projectiles = std::mem::take(&mut world.projectiles);
    let mut survivors = Vec::with_capacity(projectiles.len());
    for projectile in projectiles {
        let hit = world.enemies.iter().position(|enemy| {
            !destroyed.contains(&enemy.id)
                && enemy.position.distance_squared(projectile.position) < hit_radius_sq
        });
        match hit {
            Some(index) => {
                destroyed.insert(world.enemies[index].id);
                kills.push(index);
            }
            None => survivors.push(projectile),
        }
    }
    world.projectiles = survivors;

    for index in kills {
        let enemy = &world.enemies[index];
        let Some(defect) = catalog.get(&enemy.defect_id) else {
            continue;
        };
        let position = enemy.position;
        events.push(SimEvent::Score {
            amount: defect.score_value,
            defect_id: defect.id.clone(),
            position,
        });
        world_setup::spawn_particle_burst(world, rng, tuning, position, defect.color);
    }

    world.enemies.retain(|enemy| !destroyed.contains(&enemy.id));
    destroyed.len()
}

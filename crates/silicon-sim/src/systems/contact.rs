//! Player contact damage: chance-based hits from nearby enemies.

use silicon_core::events::SimEvent;
use silicon_core::types::Vec3;

use crate::world::WorldState;

/// Roll for contact damage against every enemy within `contact_radius`
/// of the player.
///
/// `roll` is drawn once per enemy in range and must return a value in
/// `[0, 1)`; a draw below `damage_chance` produces a `PlayerHit`. Nothing is
/// remembered between frames, so an enemy can hit again every frame the
/// player stays close.
pub fn run<F>(
    world: &WorldState,
    player_position: Vec3,
    contact_radius: f32,
    damage_chance: f32,
    roll: &mut F,
    events: &mut Vec<SimEvent>,
) where
    F: FnMut() -> f32 + ?Sized,
{
    let radius_sq = contact_radius * contact_radius;
    for enemy in &world.enemies {
        if enemy.position.distance_squared(player_position) >= radius_sq {
            continue;
        }
        if roll() < damage_chance {
            events.push(SimEvent::PlayerHit { enemy: enemy.id });
        }
    }
}

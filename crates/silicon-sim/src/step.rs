//! The per-frame simulation step.
//!
//! `step` takes the world by value and returns the next world together with
//! every event the frame produced. It does no I/O, owns no state between
//! calls, and draws all randomness from the sources it is handed, so a frame
//! can be replayed exactly from its inputs.

use rand::Rng;

use silicon_core::catalog::DefectCatalog;
use silicon_core::config::Tuning;
use silicon_core::enums::GamePhase;
use silicon_core::events::SimEvent;
use silicon_core::types::Vec3;

use crate::systems;
use crate::world::WorldState;

/// Read-only inputs for one step.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    /// Seconds since the previous frame.
    pub delta: f32,
    pub player_position: Vec3,
    /// The step is a no-op in every phase except `Playing`.
    pub phase: GamePhase,
    pub tuning: &'a Tuning,
    pub catalog: &'a DefectCatalog,
}

/// The next world and the events that produced it.
#[derive(Debug, Clone, Default)]
pub struct StepOutcome {
    pub world: WorldState,
    pub events: Vec<SimEvent>,
}

/// Advance the world by one frame.
///
/// `rng` feeds particle bursts and enemy respawns. `contact_roll` supplies one
/// draw in `[0, 1)` per enemy within contact range of the player.
pub fn step<R, F>(
    mut world: WorldState,
    ctx: &StepContext<'_>,
    rng: &mut R,
    contact_roll: &mut F,
) -> StepOutcome
where
    R: Rng + ?Sized,
    F: FnMut() -> f32 + ?Sized,
{
    let mut events = Vec::new();
    if !ctx.phase.is_playing() {
        return StepOutcome { world, events };
    }
    let tuning = ctx.tuning;

    // 1. Motion integration
    systems::movement::run(&mut world, ctx.delta);
    // 2. Particle aging (removal happens at the end of the step)
    systems::movement::decay_particles(&mut world, tuning.particle_decay_rate, ctx.delta);
    // 3. Projectiles out of range
    systems::cleanup::cull_projectiles(&mut world, tuning.projectile_max_range);
    // 4-5. Projectile-enemy hits, scoring and bursts
    systems::collision::run(&mut world, tuning, ctx.catalog, rng, &mut events);
    // 6. Contact damage
    systems::contact::run(
        &world,
        ctx.player_position,
        tuning.contact_radius,
        tuning.contact_damage_chance,
        contact_roll,
        &mut events,
    );
    // 7. Population floor
    systems::population::run(&mut world, rng, ctx.catalog, tuning);
    // 8. Expired particles
    systems::cleanup::remove_expired_particles(&mut world);

    StepOutcome { world, events }
}

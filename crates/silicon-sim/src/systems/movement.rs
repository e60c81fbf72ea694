//! Kinematic integration and particle aging.
//!
//! Explicit Euler: position += velocity * dt, no sub-stepping.

use crate::world::WorldState;

/// Advance every projectile and particle by `dt` seconds.
/// Enemies are stationary and are not integrated.
pub fn run(world: &mut WorldState, dt: f32) {
    for projectile in &mut world.projectiles {
        projectile.position += projectile.velocity * dt;
    }
    for particle in &mut world.particles {
        particle.position += particle.velocity * dt;
    }
}

/// Reduce every particle's lifetime by `decay_rate * dt`.
/// Expired particles are left in place for `cleanup::remove_expired_particles`.
pub fn decay_particles(world: &mut WorldState, decay_rate: f32, dt: f32) {
    let loss = decay_rate * dt;
    for particle in &mut world.particles {
        particle.lifetime -= loss;
    }
}

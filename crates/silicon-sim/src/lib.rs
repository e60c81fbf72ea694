//! Simulation for SILICON DEFENDER.
//!
//! `step` is the pure per-frame transformation of the entity collections.
//! `SimulationEngine` wraps it in a session: phase, score, health, discovery
//! tracking, seeded randomness, and the player command queue.

pub mod engine;
pub mod session;
pub mod step;
pub mod systems;
pub mod world;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use silicon_core as core;
pub use step::{step, StepContext, StepOutcome};
pub use world::WorldState;

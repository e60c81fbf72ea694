//! Simulation engine: the session around the pure step.
//!
//! `SimulationEngine` owns the world, the defect catalog, tunables, seeded
//! RNG streams and the session bookkeeping (phase, score, health,
//! discoveries). It processes player commands, runs `step` while playing,
//! applies the resulting events, and produces `SessionSnapshot`s. Completely
//! headless, enabling deterministic testing.

use std::collections::VecDeque;

use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use silicon_core::catalog::DefectCatalog;
use silicon_core::commands::PlayerCommand;
use silicon_core::config::Tuning;
use silicon_core::constants::DEFAULT_SEED;
use silicon_core::enums::GamePhase;
use silicon_core::events::{Discovery, SimEvent};
use silicon_core::state::SessionSnapshot;
use silicon_core::types::{SimTime, Vec3};

use crate::session::{PlayerState, ScoreState};
use crate::step::{step, StepContext};
use crate::systems;
use crate::world::WorldState;
use crate::world_setup;

/// Offset between the spawn/effects stream and the contact-roll stream, so
/// one seed drives both without them sharing draws.
const CONTACT_STREAM: u64 = 1;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine. Owns the world and all session state.
pub struct SimulationEngine {
    world: WorldState,
    catalog: DefectCatalog,
    tuning: Tuning,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    contact_rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    player: PlayerState,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine for a catalog.
    pub fn new(config: SimConfig, catalog: DefectCatalog) -> Self {
        let mut contact_rng = ChaCha8Rng::seed_from_u64(config.seed);
        contact_rng.set_stream(CONTACT_STREAM);
        Self {
            world: WorldState::new(),
            catalog,
            player: PlayerState::new(config.tuning.player_max_health),
            tuning: config.tuning,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            contact_rng,
            command_queue: VecDeque::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the session by one frame of `delta` seconds and return the
    /// resulting snapshot.
    ///
    /// Negative or non-finite deltas are treated as zero.
    pub fn tick(&mut self, delta: f32, player_position: Vec3) -> SessionSnapshot {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        self.player.position = player_position;
        self.process_commands();

        let mut events = Vec::new();
        let mut discoveries = Vec::new();
        if self.phase.is_playing() {
            events = self.run_step(delta);
            discoveries = self.apply_events(&events);
            self.time.advance(delta);
            trace!(
                "tick {}: {} projectiles, {} enemies, {} particles, {} events",
                self.time.tick,
                self.world.projectiles.len(),
                self.world.enemies.len(),
                self.world.particles.len(),
                events.len()
            );
        }

        systems::snapshot::build_snapshot(
            &self.world,
            &self.catalog,
            &self.time,
            self.phase,
            &self.player,
            &self.score,
            events,
            discoveries,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the entity collections.
    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn catalog(&self) -> &DefectCatalog {
        &self.catalog
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Mutable world access for tests that stage exact scenarios.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut WorldState {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartSession => self.start_session(),
            PlayerCommand::Shoot { origin, direction } => {
                if !self.phase.is_playing() {
                    return;
                }
                if world_setup::spawn_projectile(&mut self.world, &self.tuning, origin, direction)
                    .is_some()
                {
                    self.score.shots_fired += 1;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Playing {
                    info!("Session paused at tick {}", self.time.tick);
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    info!("Session resumed at tick {}", self.time.tick);
                    self.phase = GamePhase::Playing;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
                    self.world = WorldState::new();
                    self.phase = GamePhase::Menu;
                }
            }
        }
    }

    /// Reset all session state and spawn the opening enemy population.
    fn start_session(&mut self) {
        self.world = WorldState::new();
        self.score = ScoreState::default();
        self.player = PlayerState::new(self.tuning.player_max_health);
        self.time = SimTime::default();

        let spawned =
            world_setup::setup_session(&mut self.world, &mut self.rng, &self.catalog, &self.tuning);
        if self.catalog.is_empty() {
            warn!("Defect catalog is empty; no enemies will spawn");
        }
        info!(
            "Session started with {spawned} enemies across {} defect types",
            self.catalog.len()
        );
        self.phase = GamePhase::Playing;
    }

    /// Run one step over the world.
    fn run_step(&mut self, delta: f32) -> Vec<SimEvent> {
        let ctx = StepContext {
            delta,
            player_position: self.player.position,
            phase: self.phase,
            tuning: &self.tuning,
            catalog: &self.catalog,
        };
        let contact_rng = &mut self.contact_rng;
        let outcome = step(
            std::mem::take(&mut self.world),
            &ctx,
            &mut self.rng,
            &mut || contact_rng.gen::<f32>(),
        );
        self.world = outcome.world;
        outcome.events
    }

    /// Fold step events into score, health and discoveries.
    /// Returns the defect types discovered by these events.
    fn apply_events(&mut self, events: &[SimEvent]) -> Vec<Discovery> {
        let mut discoveries = Vec::new();
        for event in events {
            match event {
                SimEvent::Score {
                    amount, defect_id, ..
                } => {
                    if !self.score.record_kill(defect_id, *amount) {
                        continue;
                    }
                    if let Some(defect) = self.catalog.get(defect_id) {
                        debug!("Discovered defect type `{defect_id}`");
                        discoveries.push(Discovery {
                            defect_id: defect.id.clone(),
                            name: defect.name.clone(),
                            description: defect.description.clone(),
                            explanation: defect.explanation.clone(),
                            color: defect.color,
                            score_value: defect.score_value,
                        });
                    }
                }
                SimEvent::PlayerHit { enemy } => {
                    let down = self.player.take_damage(self.tuning.player_hit_damage);
                    debug!(
                        "Player hit by enemy {} (health {})",
                        enemy.0, self.player.health
                    );
                    if down && self.phase != GamePhase::GameOver {
                        info!(
                            "Game over at tick {} with {} points",
                            self.time.tick, self.score.points
                        );
                        self.phase = GamePhase::GameOver;
                    }
                }
            }
        }
        discoveries
    }
}

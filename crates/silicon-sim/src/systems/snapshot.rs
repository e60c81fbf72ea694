//! Snapshot system: builds a complete SessionSnapshot from the world.
//!
//! This system is read-only; it never modifies the world.

use silicon_core::catalog::DefectCatalog;
use silicon_core::enums::GamePhase;
use silicon_core::events::{Discovery, SimEvent};
use silicon_core::state::*;
use silicon_core::types::{Color, SimTime};

use crate::session::{PlayerState, ScoreState};
use crate::world::WorldState;

/// Build a complete SessionSnapshot from the current session state.
pub fn build_snapshot(
    world: &WorldState,
    catalog: &DefectCatalog,
    time: &SimTime,
    phase: GamePhase,
    player: &PlayerState,
    score: &ScoreState,
    events: Vec<SimEvent>,
    discoveries: Vec<Discovery>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        phase,
        player: PlayerView {
            position: player.position,
            health: player.health,
            max_health: player.max_health,
        },
        score: ScoreView {
            points: score.points,
            defects_destroyed: score.defects_destroyed,
            shots_fired: score.shots_fired,
            discovered: score.discovered.clone(),
        },
        projectiles: world
            .projectiles
            .iter()
            .map(|p| ProjectileView {
                id: p.id,
                position: p.position,
            })
            .collect(),
        enemies: build_enemies(world, catalog),
        particles: world
            .particles
            .iter()
            .map(|p| ParticleView {
                position: p.position,
                color: p.color,
                lifetime: p.lifetime,
            })
            .collect(),
        events,
        discoveries,
    }
}

/// Enemies colored from the catalog; unknown types render white.
fn build_enemies(world: &WorldState, catalog: &DefectCatalog) -> Vec<EnemyView> {
    world
        .enemies
        .iter()
        .map(|e| EnemyView {
            id: e.id,
            position: e.position,
            defect_id: e.defect_id.clone(),
            color: catalog
                .get(&e.defect_id)
                .map_or(Color::WHITE, |defect| defect.color),
        })
        .collect()
}

//! Scripted player for headless runs: aims at the nearest defect and fires
//! on a fixed cadence.

use silicon_core::commands::PlayerCommand;
use silicon_core::state::SessionSnapshot;

/// Fires one shot at the nearest enemy every `interval` ticks.
#[derive(Debug, Clone)]
pub struct Autopilot {
    interval: u64,
    last_shot_tick: Option<u64>,
}

impl Autopilot {
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            last_shot_tick: None,
        }
    }

    /// Decide the next command from the latest snapshot, if any.
    pub fn next_command(&mut self, snapshot: &SessionSnapshot) -> Option<PlayerCommand> {
        if !snapshot.phase.is_playing() {
            return None;
        }
        let tick = snapshot.time.tick;
        if let Some(last) = self.last_shot_tick {
            if tick.saturating_sub(last) < self.interval {
                return None;
            }
        }

        let origin = snapshot.player.position;
        let target = snapshot.enemies.iter().min_by(|a, b| {
            a.position
                .distance_squared(origin)
                .total_cmp(&b.position.distance_squared(origin))
        })?;

        self.last_shot_tick = Some(tick);
        Some(PlayerCommand::Shoot {
            origin,
            direction: target.position - origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use silicon_core::enums::GamePhase;
    use silicon_core::state::EnemyView;
    use silicon_core::types::{Color, EntityId, Vec3};

    use super::*;

    fn snapshot(tick: u64, enemies: &[Vec3]) -> SessionSnapshot {
        let mut snap = SessionSnapshot {
            phase: GamePhase::Playing,
            ..Default::default()
        };
        snap.time.tick = tick;
        snap.enemies = enemies
            .iter()
            .enumerate()
            .map(|(i, &position)| EnemyView {
                id: EntityId(i as u64),
                position,
                defect_id: "vacancy".into(),
                color: Color::WHITE,
            })
            .collect();
        snap
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut pilot = Autopilot::new(5);
        let snap = snapshot(1, &[Vec3::new(0.0, 0.0, -30.0), Vec3::new(4.0, 0.0, 0.0)]);
        match pilot.next_command(&snap) {
            Some(PlayerCommand::Shoot { origin, direction }) => {
                assert_eq!(origin, Vec3::ZERO);
                assert_eq!(direction, Vec3::new(4.0, 0.0, 0.0));
            }
            other => panic!("expected a shot, got {other:?}"),
        }
    }

    #[test]
    fn test_respects_cadence() {
        let mut pilot = Autopilot::new(5);
        let enemies = [Vec3::X];
        assert!(pilot.next_command(&snapshot(10, &enemies)).is_some());
        assert!(pilot.next_command(&snapshot(12, &enemies)).is_none());
        assert!(pilot.next_command(&snapshot(15, &enemies)).is_some());
    }

    #[test]
    fn test_huge_interval_holds_fire() {
        let mut pilot = Autopilot::new(u64::MAX);
        let enemies = [Vec3::X];
        assert!(pilot.next_command(&snapshot(5, &enemies)).is_some());
        assert!(pilot.next_command(&snapshot(6, &enemies)).is_none());
        assert!(pilot.next_command(&snapshot(u64::MAX, &enemies)).is_none());
    }

    #[test]
    fn test_idle_without_targets_or_session() {
        let mut pilot = Autopilot::new(1);
        assert!(pilot.next_command(&snapshot(1, &[])).is_none());

        let mut paused = snapshot(2, &[Vec3::X]);
        paused.phase = GamePhase::Paused;
        assert!(pilot.next_command(&paused).is_none());
    }
}

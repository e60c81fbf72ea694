//! Tests for the shared vocabulary: serde shapes, catalog and tuning loading.

use approx::assert_relative_eq;

use crate::catalog::DefectCatalog;
use crate::commands::PlayerCommand;
use crate::config::{LoadError, Tuning};
use crate::constants::*;
use crate::enums::GamePhase;
use crate::events::SimEvent;
use crate::state::SessionSnapshot;
use crate::types::{Color, DefectId, EntityId, SimTime, Vec3};

const CATALOG_JSON: &str = r##"[
    {
        "id": "vacancy",
        "name": "Vacancy",
        "description": "A missing atom in the lattice.",
        "explanation": "Vacancies form when an atom leaves its lattice site.",
        "color": "#ff4444",
        "scoreValue": 100
    },
    {
        "id": "interstitial",
        "name": "Interstitial",
        "description": "An extra atom squeezed between sites.",
        "color": "#44ff44",
        "scoreValue": 150
    }
]"##;

// ---- Types ----

#[test]
fn test_entity_id_next_is_monotonic() {
    let mut counter = EntityId::default();
    let a = counter.next();
    let b = counter.next();
    assert_eq!(a, EntityId(0));
    assert_eq!(b, EntityId(1));
    assert_eq!(counter, EntityId(2));
}

#[test]
fn test_color_hex_parse() {
    let c = Color::from_hex("#ff8000").unwrap();
    assert_relative_eq!(c.r, 1.0);
    assert_relative_eq!(c.g, 128.0 / 255.0);
    assert_relative_eq!(c.b, 0.0);
    assert_eq!(c.to_hex(), "#ff8000");

    // Prefix is optional.
    assert_eq!(Color::from_hex("00ff00"), Some(Color::new(0.0, 1.0, 0.0)));
}

#[test]
fn test_color_hex_rejects_garbage() {
    assert!(Color::from_hex("#fff").is_none());
    assert!(Color::from_hex("#gg0000").is_none());
    assert!(Color::from_hex("#ff00ff00").is_none());
    assert!(Color::from_hex("#+1+2+3").is_none());
    assert!(Color::from_hex("#-1-2-3").is_none());
    assert!(serde_json::from_str::<Color>("\"red\"").is_err());
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance(DT);
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    // 60 ticks at 60Hz = 1 second
    assert!((time.elapsed_secs - 1.0).abs() < 1e-5);
}

#[test]
fn test_game_phase_playing() {
    assert!(GamePhase::Playing.is_playing());
    assert!(!GamePhase::Paused.is_playing());
    assert!(!GamePhase::Menu.is_playing());
    assert!(!GamePhase::GameOver.is_playing());
    assert_eq!(GamePhase::default(), GamePhase::Menu);
}

// ---- Catalog ----

#[test]
fn test_catalog_from_json() {
    let catalog = DefectCatalog::from_json_str(CATALOG_JSON).unwrap();
    assert_eq!(catalog.len(), 2);

    let vacancy = catalog.get(&DefectId::new("vacancy")).unwrap();
    assert_eq!(vacancy.name, "Vacancy");
    assert_eq!(vacancy.score_value, 100);
    assert_eq!(vacancy.color, Color::from_hex("#ff4444").unwrap());

    // Explanation is optional and defaults to empty.
    let interstitial = catalog.get(&"interstitial".into()).unwrap();
    assert!(interstitial.explanation.is_empty());

    assert_eq!(catalog.get_index(1).unwrap().id, DefectId::new("interstitial"));
    assert!(catalog.get(&"impurity".into()).is_none());
    assert!(catalog.get_index(2).is_none());
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let json = r##"[
        {"id": "vacancy", "name": "A", "description": "", "color": "#000000", "scoreValue": 1},
        {"id": "vacancy", "name": "B", "description": "", "color": "#000000", "scoreValue": 2}
    ]"##;
    let err = DefectCatalog::from_json_str(json).unwrap_err();
    assert!(matches!(err, LoadError::Invalid(_)));
    assert!(err.to_string().contains("vacancy"));
}

#[test]
fn test_catalog_parse_error() {
    let err = DefectCatalog::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, LoadError::Parse(_)));
}

#[test]
fn test_catalog_missing_file() {
    let err = DefectCatalog::from_json_file("/nonexistent/defects.json").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn test_empty_catalog() {
    let catalog = DefectCatalog::from_json_str("[]").unwrap();
    assert!(catalog.is_empty());
    assert_eq!(catalog.iter().count(), 0);
}

// ---- Tuning ----

#[test]
fn test_default_tuning_is_valid() {
    let tuning = Tuning::default();
    tuning.validate().unwrap();
    assert_eq!(tuning.particle_burst_count, 12);
    assert_eq!(tuning.enemy_population_floor, 5);
    assert_relative_eq!(tuning.projectile_speed, 80.0);
    assert_relative_eq!(tuning.projectile_max_range, 200.0);
}

#[test]
fn test_partial_tuning_uses_defaults() {
    let tuning = Tuning::from_json_str(r#"{ "hit_radius": 3.0 }"#).unwrap();
    assert_relative_eq!(tuning.hit_radius, 3.0);
    assert_eq!(
        Tuning {
            hit_radius: HIT_RADIUS,
            ..tuning
        },
        Tuning::default()
    );
}

#[test]
fn test_tuning_rejects_bad_values() {
    let cases = [
        r#"{ "contact_damage_chance": 1.5 }"#,
        r#"{ "projectile_speed": 0.0 }"#,
        r#"{ "particle_min_speed": 9.0, "particle_max_speed": 8.0 }"#,
        r#"{ "player_max_health": 0 }"#,
        r#"{ "contact_radius": -2.0 }"#,
        r#"{ "projectile_spawn_offset": -0.5 }"#,
    ];
    for json in cases {
        let err = Tuning::from_json_str(json).unwrap_err();
        assert!(
            matches!(err, LoadError::Invalid(_)),
            "{json} should be rejected as invalid, got {err}"
        );
    }
}

// ---- Serde shapes ----

#[test]
fn test_sim_event_tagged() {
    let event = SimEvent::Score {
        amount: 100,
        defect_id: "vacancy".into(),
        position: Vec3::new(1.0, 2.0, 3.0),
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["type"], "Score");
    assert_eq!(json["defect_id"], "vacancy");
    assert_eq!(json["amount"], 100);

    let back: SimEvent = serde_json::from_value(json).unwrap();
    assert_eq!(back, event);

    let hit = serde_json::to_value(SimEvent::PlayerHit { enemy: EntityId(7) }).unwrap();
    assert_eq!(hit["type"], "PlayerHit");
    assert_eq!(hit["enemy"], 7);
}

#[test]
fn test_player_command_from_json() {
    let json = r#"{ "type": "Shoot", "origin": [0.0, 1.5, 0.0], "direction": [0.0, 0.0, -1.0] }"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    match cmd {
        PlayerCommand::Shoot { origin, direction } => {
            assert_eq!(origin, Vec3::new(0.0, 1.5, 0.0));
            assert_eq!(direction, Vec3::NEG_Z);
        }
        other => panic!("expected Shoot, got {other:?}"),
    }

    let pause: PlayerCommand = serde_json::from_str(r#"{ "type": "Pause" }"#).unwrap();
    assert!(matches!(pause, PlayerCommand::Pause));
}

#[test]
fn test_snapshot_serde() {
    let snapshot = SessionSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(
        json.len() < 1024,
        "Empty snapshot should be <1KB, was {} bytes",
        json.len()
    );
}

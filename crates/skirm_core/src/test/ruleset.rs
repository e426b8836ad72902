use crate::prelude::*;
use crate::v;
use std::collections::HashMap;

fn sample_ruleset() -> Ruleset {
    Ruleset {
        info: ModInfo {
            id: "skirm-vanilla".to_string(),
            name: "Vanilla".to_string(),
            author: "skirm".to_string(),
            is_master: true,
            ..Default::default()
        },
        settings: DamageSettings { tftd_damage: false },
        damage_types: vec![
            RuleDamageType {
                resist_type: ResistType::Ap,
                ..Default::default()
            },
            RuleDamageType {
                resist_type: ResistType::He,
                fix_radius: -1,
                to_tile: 0.75,
                smoke_chance: 25,
                ..Default::default()
            },
            RuleDamageType {
                resist_type: ResistType::In,
                fix_radius: 4,
                fire_chance: 75,
                fire_blast_calc: true,
                ..Default::default()
            },
        ],
        explosions: HashMap::from([(
            "big-blast".to_string(),
            RuleExplosion {
                name: "big-blast".to_string(),
                sprite_sheet: "SMOKE.PCK".to_string(),
                start: 9,
                end: 16,
                animation_speed: 4,
                density: 10,
            },
        )]),
        music: HashMap::from([(
            "tactical".to_string(),
            RuleMusic {
                name: "tactical".to_string(),
                cat_index: 3,
                normalization: 0.75,
            },
        )]),
        stat_strings: vec![StatString {
            string: "Sniper".to_string(),
            conditions: vec![StatStringCondition {
                stat: "firing".to_string(),
                min: 60,
                max: 255,
            }],
        }],
        skins: HashMap::from([(
            "inventory".to_string(),
            StateSkin {
                state: "inventory".to_string(),
                palette: "PAL_BATTLESCAPE".to_string(),
                background: "TAC01.SCR".to_string(),
                text_color: 16,
                highlight_color: 32,
            },
        )]),
        layouts: HashMap::from([(
            "scout".to_string(),
            EquipmentLayout {
                name: "scout".to_string(),
                items: vec![EquipmentLayoutItem {
                    item: "STR_RIFLE".to_string(),
                    slot: "STR_RIGHT_HAND".to_string(),
                    ammo_item: Some("STR_RIFLE_CLIP".to_string()),
                    ..Default::default()
                }],
            },
        )]),
        routes: HashMap::from([(
            "perimeter".to_string(),
            Route {
                name: "perimeter".to_string(),
                nodes: vec![Spawnpoint {
                    position: v!(3, 9, 0),
                    rank: 2,
                    priority: 5,
                    links: vec![NodeLink::default()],
                    ..Default::default()
                }],
            },
        )]),
    }
}

#[test]
fn vanilla_assets_load() {
    let ruleset =
        Ruleset::from_assets_location(&("../../".to_string() + RULESET_PATH), 0).unwrap();
    assert_eq!(ruleset.info.id, "skirm-vanilla");
    assert_eq!(ruleset.damage_types.len(), 10);
    assert!(ruleset.get_damage_type(ResistType::He).fix_radius < 0);
    assert!(ruleset.get_damage_type(ResistType::Stun).ignore_armor);
    assert!(ruleset.explosions.contains_key("large-blast"));
    assert_eq!(ruleset.music["tactical"].cat_index, 3);
    assert!(!ruleset.stat_strings.is_empty());
    assert_eq!(ruleset.routes["perimeter"].nodes.len(), 2);
    let node = &ruleset.routes["perimeter"].nodes[1];
    assert!(node.links[1].is_exit());
}

#[test]
fn assets_round_trip() {
    let dir = std::env::temp_dir().join(format!("skirm_ruleset_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let base_path = dir.to_string_lossy().to_string();

    let ruleset = sample_ruleset();
    ruleset.to_assets_location(&base_path).unwrap();
    let loaded = Ruleset::from_assets_location(&base_path, 0).unwrap();
    assert_eq!(ruleset, loaded);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_section_file_fails() {
    let dir = std::env::temp_dir().join(format!("skirm_empty_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let base_path = dir.to_string_lossy().to_string();

    match Ruleset::from_assets_location(&base_path, 0) {
        Err(RulesetLoadError::ReadingFile { path, .. }) => {
            assert!(path.ends_with("metadata.ron"))
        }
        other => panic!("expected a read error, got {:?}", other),
    }

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn get_damage_type_finds_by_resist() {
    let ruleset = sample_ruleset();
    assert_eq!(ruleset.get_damage_type(ResistType::He).fix_radius, -1);
    assert!(ruleset.get_damage_type(ResistType::In).fire_blast_calc);
}

#[test]
#[should_panic]
fn get_damage_type_panics_on_missing_entry() {
    let ruleset = sample_ruleset();
    ruleset.get_damage_type(ResistType::Acid);
}

#[test]
fn explosions_resolve_with_the_mod_index() {
    let dir = std::env::temp_dir().join(format!("skirm_modidx_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let base_path = dir.to_string_lossy().to_string();

    let mut ruleset = sample_ruleset();
    let legacy = RuleExplosion {
        name: "legacy".to_string(),
        sprite_sheet: "X1.PCK".to_string(),
        start: 9,
        end: 16,
        ..Default::default()
    };
    ruleset
        .explosions
        .insert("legacy".to_string(), legacy);
    ruleset.to_assets_location(&base_path).unwrap();

    let loaded = Ruleset::from_assets_location(&base_path, 5).unwrap();
    assert_eq!(loaded.explosions["legacy"].start, 14);
    assert_eq!(loaded.explosions["legacy"].end, 21);
    // non-legacy sheets are untouched by the offset
    assert_eq!(loaded.explosions["big-blast"].start, 9);

    std::fs::remove_dir_all(&dir).unwrap();
}

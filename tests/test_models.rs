//! Model wire-shape and matching tests.

mod common;

use common::sample_card;
use pocket_tcg_sdk::{Attack, Card};

#[test]
fn card_serializes_with_camel_case_keys_and_type_rename() {
    let mut card = sample_card("A2b", "22", "Pikachu ex", "Pok\u{e9}mon");
    card.image_url = "https://images.example.com/A2b/22.png".into();
    card.hp = 120;
    card.retreat_cost = 1;
    card.attacks = vec![Attack {
        name: "Thunderbolt".into(),
        damage: "150".into(),
        effect: String::new(),
        energy_requirement: "LLL".into(),
    }];

    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["id"], "22");
    assert_eq!(json["setId"], "A2b");
    assert_eq!(json["type"], "Lightning");
    assert_eq!(json["imageUrl"], "https://images.example.com/A2b/22.png");
    assert_eq!(json["hp"], 120);
    assert_eq!(json["retreatCost"], 1);
    assert_eq!(json["stage"], serde_json::Value::Null);
    assert_eq!(json["attacks"][0]["name"], "Thunderbolt");
    assert_eq!(json["attacks"][0]["energyRequirement"], "LLL");

    // None of the snake_case spellings leak onto the wire.
    let obj = json.as_object().unwrap();
    assert!(!obj.contains_key("set_id"));
    assert!(!obj.contains_key("image_url"));
    assert!(!obj.contains_key("type_field"));
    assert!(!obj.contains_key("retreat_cost"));
}

#[test]
fn card_deserializes_with_defaults_for_missing_attack_fields() {
    let card: Card = serde_json::from_str(
        r#"{
            "id": "1",
            "setId": "A1",
            "name": "Bulbasaur",
            "imageUrl": "",
            "type": "Grass",
            "hp": 70,
            "category": "Pokémon",
            "stage": "Basic",
            "rarity": "Common",
            "attacks": [{"name": "Vine Whip"}],
            "weakness": null,
            "resistance": null,
            "retreatCost": 1,
            "specialRule": null,
            "illustrator": null
        }"#,
    )
    .unwrap();

    assert_eq!(card.type_field, "Grass");
    assert_eq!(card.attacks[0].name, "Vine Whip");
    assert_eq!(card.attacks[0].damage, "");
    assert_eq!(card.attacks[0].effect, "");
    assert_eq!(card.attacks[0].energy_requirement, "");
}

#[test]
fn key_pairs_set_and_card_ids() {
    let card = sample_card("A1", "1", "Bulbasaur", "Pok\u{e9}mon");
    assert_eq!(card.key(), ("A1", "1"));
}

#[test]
fn matches_scans_name_type_stage_rarity_and_attacks() {
    let mut card = sample_card("A2b", "22", "Pikachu ex", "Pok\u{e9}mon");
    card.stage = Some("Basic".into());
    card.rarity = "Double Rare".into();
    card.attacks = vec![Attack {
        name: "Thunderbolt".into(),
        damage: "150".into(),
        effect: "Discard all Energy from this Pok\u{e9}mon.".into(),
        energy_requirement: "LLL".into(),
    }];

    assert!(card.matches("pikachu"));
    assert!(card.matches("LIGHTNING"));
    assert!(card.matches("basic"));
    assert!(card.matches("double rare"));
    assert!(card.matches("thunderbolt"));
    assert!(card.matches("discard all energy"));
    assert!(!card.matches("mewtwo"));
}

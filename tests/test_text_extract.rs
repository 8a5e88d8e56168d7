//! Text Field Extractor tests: independent probes over the condensed
//! card-description string.

use pocket_tcg_sdk::extract::parse_card_text;

const PIKACHU_TEXT: &str = "Pikachu ex - Lightning - 120 HP Pok\u{e9}mon - Basic LLL Thunderbolt 150 Discard all Energy from this Pok\u{e9}mon. Weakness: Fighting Retreat: 1 ex rule: When your Pok\u{e9}mon ex is Knocked Out, your opponent gets 2 points. Illustrated by PLANETA Igarashi";

// ---------------------------------------------------------------------------
// Name / type / category / stage
// ---------------------------------------------------------------------------

#[test]
fn name_and_type_come_from_the_leading_dashes() {
    let parsed = parse_card_text("Bulbasaur - Grass - 70 HP Pok\u{e9}mon - Basic GG Vine Whip 40 Weakness: Fire Retreat: 1");
    assert_eq!(parsed.name, "Bulbasaur");
    assert_eq!(parsed.type_field, "Grass");
    assert_eq!(parsed.category, "Pok\u{e9}mon");
    assert_eq!(parsed.stage.as_deref(), Some("Basic"));
}

#[test]
fn missing_name_prefix_leaves_name_and_type_empty() {
    let parsed = parse_card_text("no dashes anywhere here");
    assert_eq!(parsed.name, "");
    assert_eq!(parsed.type_field, "");
}

#[test]
fn stage_takes_the_first_two_words() {
    let parsed = parse_card_text("Ivysaur - Grass - 90 HP Pok\u{e9}mon - Stage 1 GGC Razor Leaf 60 Weakness: Fire Retreat: 2");
    assert_eq!(parsed.category, "Pok\u{e9}mon");
    assert_eq!(parsed.stage.as_deref(), Some("Stage 1"));
}

#[test]
fn single_word_category_is_taken_verbatim() {
    let parsed = parse_card_text("Old Amber - Odd - 40 HP Pok\u{e9}mon - Item GG Dig 10 Weakness: Fire Retreat: 1");
    assert_eq!(parsed.category, "Item");
    assert_eq!(parsed.stage, None);
}

#[test]
fn missing_anchor_defaults_category_to_pokemon() {
    // Trainer and Energy descriptions carry no "HP Pokémon -" anchor; the
    // category falls back to the documented guess.
    let parsed = parse_card_text("Professor's Research - Trainer card text");
    assert_eq!(parsed.category, "Pok\u{e9}mon");
    assert_eq!(parsed.stage, None);
}

// ---------------------------------------------------------------------------
// HP
// ---------------------------------------------------------------------------

#[test]
fn hp_is_the_integer_before_the_hp_token() {
    for hp in [0u32, 30, 120, 340] {
        let text = format!("A - B - {} HP Pok\u{e9}mon - Basic", hp);
        assert_eq!(parse_card_text(&text).hp, hp, "hp={}", hp);
    }
}

#[test]
fn absent_hp_token_yields_zero() {
    assert_eq!(parse_card_text("A - B - no hit points here").hp, 0);
}

// ---------------------------------------------------------------------------
// Weakness / retreat / special rule / illustrator
// ---------------------------------------------------------------------------

#[test]
fn weakness_stops_at_the_retreat_marker() {
    let parsed = parse_card_text(PIKACHU_TEXT);
    assert_eq!(parsed.weakness.as_deref(), Some("Fighting"));
    assert_eq!(parsed.retreat_cost, 1);
}

#[test]
fn weakness_without_retreat_runs_to_end_of_text() {
    let parsed = parse_card_text("A - B - Weakness: Darkness");
    assert_eq!(parsed.weakness.as_deref(), Some("Darkness"));
    assert_eq!(parsed.retreat_cost, 0);
}

#[test]
fn ex_rule_stops_before_the_illustrator_credit() {
    let parsed = parse_card_text(PIKACHU_TEXT);
    assert_eq!(
        parsed.special_rule.as_deref(),
        Some("When your Pok\u{e9}mon ex is Knocked Out, your opponent gets 2 points.")
    );
    assert_eq!(parsed.illustrator.as_deref(), Some("PLANETA Igarashi"));
}

#[test]
fn absent_probes_leave_optionals_unset() {
    let parsed = parse_card_text("");
    assert_eq!(parsed.weakness, None);
    assert_eq!(parsed.special_rule, None);
    assert_eq!(parsed.illustrator, None);
    assert_eq!(parsed.attack, None);
    assert_eq!(parsed.retreat_cost, 0);
}

// ---------------------------------------------------------------------------
// Single-attack guess
// ---------------------------------------------------------------------------

#[test]
fn full_description_extracts_every_field() {
    let parsed = parse_card_text(PIKACHU_TEXT);

    assert_eq!(parsed.name, "Pikachu ex");
    assert_eq!(parsed.type_field, "Lightning");
    assert_eq!(parsed.hp, 120);
    assert_eq!(parsed.category, "Pok\u{e9}mon");
    assert_eq!(parsed.stage.as_deref(), Some("Basic"));

    let attack = parsed.attack.expect("attack guess");
    assert_eq!(attack.name, "Thunderbolt");
    assert_eq!(attack.damage, "150");
    assert_eq!(attack.energy_requirement, "LLL");
    assert_eq!(attack.effect, "Discard all Energy from this Pok\u{e9}mon.");
}

#[test]
fn attack_cost_run_must_sit_at_a_word_start() {
    // The P of "120 HP" must not be read as a Psychic cost.
    let parsed = parse_card_text(PIKACHU_TEXT);
    assert_eq!(parsed.attack.unwrap().energy_requirement, "LLL");
}

#[test]
fn no_weakness_terminator_means_no_attack_guess() {
    let parsed = parse_card_text("A - B - 50 HP Pok\u{e9}mon - Basic LL Jolt 20 some effect");
    assert_eq!(parsed.attack, None);
}

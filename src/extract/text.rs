//! Field extraction from the condensed card-description text.
//!
//! The detail page's `.card-details` block flattens to one string of the
//! form:
//!
//! `"Pikachu ex - Lightning - 120 HP Pokémon - Basic LLL Thunderbolt 150
//! Discard all Energy from this Pokémon. Weakness: Fighting Retreat: 1
//! ex rule: ... Illustrated by PLANETA Igarashi"`
//!
//! Each field is probed independently by pattern match over that string.
//! A probe that finds nothing is a valid outcome, not a fault: the field is
//! left at its documented default and nothing here ever returns an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::{Attack, CATEGORY_POKEMON};

static NAME_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-]+) - ([^-]+) -").expect("valid regex"));
static HP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+) HP").expect("valid regex"));
// Captures everything after the anchor up to the first energy-code letter
// (the start of the first attack's cost run).
static CATEGORY_STAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"HP Pokémon - ([^LFWGPDMC]+)").expect("valid regex"));
// Energy run, attack name (digit-free), damage, effect, up to "Weakness:".
// The run must sit at a word start so the P of "120 HP" is never mistaken
// for a cost.
static ATTACK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|\s)([LFWGPDMC]+) ([^0-9]+)(\d+)(.*?)Weakness:").expect("valid regex")
});
static WEAKNESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Weakness: (.+?)(?: Retreat:|$)").expect("valid regex"));
static RETREAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Retreat: (\d+)").expect("valid regex"));
static EX_RULE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ex rule: (.+?)(?: Illustrated by|$)").expect("valid regex"));
static ILLUSTRATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Illustrated by (.+)$").expect("valid regex"));

// ---------------------------------------------------------------------------
// CardText
// ---------------------------------------------------------------------------

/// The fields recoverable from the condensed description text alone.
///
/// `attack` is deliberately a weak single-attack guess; when the detail page
/// carries structured attack fragments, [`crate::extract::attacks`] replaces
/// it with the full list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardText {
    pub name: String,
    pub type_field: String,
    pub hp: u32,
    pub category: String,
    pub stage: Option<String>,
    pub attack: Option<Attack>,
    pub weakness: Option<String>,
    pub retreat_cost: u32,
    pub special_rule: Option<String>,
    pub illustrator: Option<String>,
}

/// Run every probe over the description text.
pub fn parse_card_text(text: &str) -> CardText {
    let mut out = CardText::default();

    if let Some(caps) = NAME_TYPE.captures(text) {
        out.name = caps[1].trim().to_string();
        out.type_field = caps[2].trim().to_string();
    }

    out.hp = HP
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);

    match CATEGORY_STAGE.captures(text) {
        Some(caps) => {
            let captured = caps[1].trim();
            if captured == "Basic" {
                out.category = CATEGORY_POKEMON.to_string();
                out.stage = Some("Basic".to_string());
            } else {
                let words: Vec<&str> = captured.split_whitespace().collect();
                if words.len() >= 2 {
                    // Covers "Stage 1", "Stage 2".
                    out.category = CATEGORY_POKEMON.to_string();
                    out.stage = Some(format!("{} {}", words[0], words[1]));
                } else {
                    out.category = captured.to_string();
                }
            }
        }
        // Known weakness: with no "HP Pokémon -" anchor (Trainer and Energy
        // cards) the category is guessed, not extracted.
        None => out.category = CATEGORY_POKEMON.to_string(),
    }

    if let Some(caps) = ATTACK.captures(text) {
        out.attack = Some(Attack {
            name: caps[2].trim().to_string(),
            damage: caps[3].to_string(),
            effect: caps[4].trim().to_string(),
            energy_requirement: caps[1].to_string(),
        });
    }

    if let Some(caps) = WEAKNESS.captures(text) {
        out.weakness = Some(caps[1].trim().to_string());
    }

    out.retreat_cost = RETREAT
        .captures(text)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0);

    if let Some(caps) = EX_RULE.captures(text) {
        out.special_rule = Some(caps[1].trim().to_string());
    }

    if let Some(caps) = ILLUSTRATOR.captures(text) {
        out.illustrator = Some(caps[1].trim().to_string());
    }

    out
}

use serde::{Deserialize, Serialize};

/// Category label for Pokémon cards.
pub const CATEGORY_POKEMON: &str = "Pokémon";
/// Category label for Trainer cards.
pub const CATEGORY_TRAINER: &str = "Trainer";
/// Category label for Energy cards.
pub const CATEGORY_ENERGY: &str = "Energy";

// ---------------------------------------------------------------------------
// Attack — One attack on a card
// ---------------------------------------------------------------------------

/// A single attack. Has no identity beyond its position in the owning
/// card's attack list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub name: String,
    /// Numeric damage text; empty when the attack deals no printed damage.
    #[serde(default)]
    pub damage: String,
    #[serde(default)]
    pub effect: String,
    /// One-letter energy codes, cost order; length = total energy cost.
    #[serde(default)]
    pub energy_requirement: String,
}

// ---------------------------------------------------------------------------
// Card — The canonical card record
// ---------------------------------------------------------------------------

/// Canonical representation of one card, identified by `(set_id, id)`.
///
/// A card built from a detail-page fetch is authoritative (fully populated).
/// One built from a listing, search, or set page is partial: `hp` is 0,
/// `rarity` is empty, `attacks` is empty and `retreat_cost` is 0, pending a
/// later detail fetch. Both shapes are valid instances of this type; callers
/// must not assume completeness from presence alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub set_id: String,
    pub name: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub type_field: String,
    /// Hit points; 0 means unknown / not parsed.
    pub hp: u32,
    /// "Pokémon", "Trainer", "Energy", or whatever the source text said.
    pub category: String,
    pub stage: Option<String>,
    /// "Unknown" when the detail page carried no rarity block; empty on
    /// partial records.
    pub rarity: String,
    #[serde(default)]
    pub attacks: Vec<Attack>,
    pub weakness: Option<String>,
    pub resistance: Option<String>,
    /// 0 when unknown.
    pub retreat_cost: u32,
    /// Rule text for the "ex" mechanic, when present.
    pub special_rule: Option<String>,
    pub illustrator: Option<String>,
}

impl Card {
    /// Build a partial record from listing markup. Deep attributes stay at
    /// their documented defaults until a detail fetch fills them in.
    pub fn partial(
        set_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        type_field: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            set_id: set_id.into(),
            name: name.into(),
            image_url: image_url.into(),
            type_field: type_field.into(),
            hp: 0,
            category: CATEGORY_POKEMON.to_string(),
            stage: None,
            rarity: String::new(),
            attacks: Vec::new(),
            weakness: None,
            resistance: None,
            retreat_cost: 0,
            special_rule: None,
            illustrator: None,
        }
    }

    /// The cache key for this card.
    pub fn key(&self) -> (&str, &str) {
        (&self.set_id, &self.id)
    }

    /// Case-insensitive match against name, type, stage, rarity, and attack
    /// names/effects. Broader than the cache's search fallback (which only
    /// looks at name and type); intended for callers filtering result lists.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.name.to_lowercase().contains(&q)
            || self.type_field.to_lowercase().contains(&q)
            || self
                .stage
                .as_deref()
                .is_some_and(|s| s.to_lowercase().contains(&q))
            || self.rarity.to_lowercase().contains(&q)
            || self.attacks.iter().any(|a| {
                a.name.to_lowercase().contains(&q) || a.effect.to_lowercase().contains(&q)
            })
    }
}

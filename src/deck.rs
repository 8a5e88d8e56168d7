//! Deck assembly rules: pure validation, aggregation, and export over card
//! records. Nothing here touches HTML or the network.

use std::fmt::Write as _;

use crate::models::{Card, CATEGORY_ENERGY, CATEGORY_POKEMON, CATEGORY_TRAINER};

/// Maximum deck size.
pub const DECK_SIZE_LIMIT: usize = 60;
/// Maximum copies of one card (same set id and card id) per deck.
pub const COPY_LIMIT: usize = 4;

/// Export section order is fixed regardless of deck order.
const CATEGORY_ORDER: [&str; 3] = [CATEGORY_POKEMON, CATEGORY_TRAINER, CATEGORY_ENERGY];

// ---------------------------------------------------------------------------
// DeckError
// ---------------------------------------------------------------------------

/// Deck rule violations. Reported to the caller synchronously; the one
/// exception is oversized imports, which are truncated and reported rather
/// than rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("cannot have more than {} copies of {name} ({set_id} {card_id})", COPY_LIMIT)]
    CopyLimit {
        name: String,
        set_id: String,
        card_id: String,
    },

    #[error("deck cannot contain more than {} cards", DECK_SIZE_LIMIT)]
    SizeLimit,

    #[error("no valid card entries found in the deck list")]
    NoEntries,

    #[error("failed to import card {name} ({set_id} {card_id}): {reason}")]
    ImportFetch {
        name: String,
        set_id: String,
        card_id: String,
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Deck
// ---------------------------------------------------------------------------

/// An ordered multiset of up to [`DECK_SIZE_LIMIT`] card records,
/// duplicates allowed up to [`COPY_LIMIT`] per key.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck from an imported card sequence, truncating to the size
    /// cap. Returns the deck and the number of dropped cards.
    pub fn from_import(mut cards: Vec<Card>) -> (Self, usize) {
        let dropped = cards.len().saturating_sub(DECK_SIZE_LIMIT);
        cards.truncate(DECK_SIZE_LIMIT);
        (Self { cards }, dropped)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many copies of `(set_id, card_id)` the deck holds.
    pub fn count_of(&self, set_id: &str, card_id: &str) -> usize {
        self.cards
            .iter()
            .filter(|c| c.set_id == set_id && c.id == card_id)
            .count()
    }

    /// Add a card, enforcing the copy limit and size cap. On rejection the
    /// deck is unchanged.
    pub fn add(&mut self, card: Card) -> Result<(), DeckError> {
        if self.count_of(&card.set_id, &card.id) >= COPY_LIMIT {
            return Err(DeckError::CopyLimit {
                name: card.name,
                set_id: card.set_id,
                card_id: card.id,
            });
        }
        if self.cards.len() >= DECK_SIZE_LIMIT {
            return Err(DeckError::SizeLimit);
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the first copy of `(set_id, card_id)`, returning it.
    pub fn remove(&mut self, set_id: &str, card_id: &str) -> Option<Card> {
        let index = self
            .cards
            .iter()
            .position(|c| c.set_id == set_id && c.id == card_id)?;
        Some(self.cards.remove(index))
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Collapse the deck into `(card, count)` pairs keyed by
    /// `(set_id, card_id)`, preserving first-seen order.
    pub fn grouped(&self) -> Vec<(&Card, usize)> {
        let mut groups: Vec<(&Card, usize)> = Vec::new();
        for card in &self.cards {
            match groups.iter_mut().find(|(c, _)| c.key() == card.key()) {
                Some((_, count)) => *count += 1,
                None => groups.push((card, 1)),
            }
        }
        groups
    }

    /// How many cards (counting copies) carry the given category.
    pub fn category_count(&self, category: &str) -> usize {
        self.cards.iter().filter(|c| c.category == category).count()
    }

    // -- Export ------------------------------------------------------------

    /// Render the deck as a plain deck list: a `Category: count` header per
    /// category in the fixed order Pokémon, Trainer, Energy, followed by
    /// one `count name setId cardId` line per group.
    pub fn export_text(&self) -> String {
        let grouped = self.grouped();
        let mut out = String::new();

        for (i, category) in CATEGORY_ORDER.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let _ = writeln!(out, "{}: {}", category, self.category_count(category));
            for (card, count) in grouped.iter().filter(|(c, _)| c.category == *category) {
                let _ = writeln!(out, "{} {} {} {}", count, card.name, card.set_id, card.id);
            }
        }

        out
    }

    /// Render the deck with a full attribute dump per group, each block
    /// separated by a divider.
    pub fn export_detailed(&self) -> String {
        let grouped = self.grouped();
        let mut out = String::from("# DETAILED DECK LIST\n\n");

        let _ = writeln!(out, "Total Cards: {}/{}", self.cards.len(), DECK_SIZE_LIMIT);
        for category in CATEGORY_ORDER {
            let _ = writeln!(out, "{}: {}", category, self.category_count(category));
        }
        out.push('\n');

        out.push_str("## POKÉMON\n\n");
        for (card, count) in grouped.iter().filter(|(c, _)| c.category == CATEGORY_POKEMON) {
            self.write_pokemon_block(&mut out, card, *count);
        }

        let trainers: Vec<_> = grouped
            .iter()
            .filter(|(c, _)| c.category == CATEGORY_TRAINER)
            .collect();
        if !trainers.is_empty() {
            out.push_str("## TRAINER CARDS\n\n");
            for (card, count) in trainers {
                let _ = writeln!(out, "### {}x {} ({} {})", count, card.name, card.set_id, card.id);
                out.push_str("\n\n---\n\n");
            }
        }

        let energies: Vec<_> = grouped
            .iter()
            .filter(|(c, _)| c.category == CATEGORY_ENERGY)
            .collect();
        if !energies.is_empty() {
            out.push_str("## ENERGY CARDS\n\n");
            for (card, count) in energies {
                let _ = writeln!(out, "### {}x {} ({} {})", count, card.name, card.set_id, card.id);
                out.push_str("\n\n---\n\n");
            }
        }

        out
    }

    fn write_pokemon_block(&self, out: &mut String, card: &Card, count: usize) {
        let _ = writeln!(out, "### {}x {} ({} {})\n", count, card.name, card.set_id, card.id);
        let _ = writeln!(out, "Type: {}", card.type_field);
        let _ = writeln!(out, "HP: {}", card.hp);
        if let Some(stage) = &card.stage {
            let _ = writeln!(out, "Stage: {}", stage);
        }
        if !card.rarity.is_empty() {
            let _ = writeln!(out, "Rarity: {}", card.rarity);
        }

        if !card.attacks.is_empty() {
            out.push_str("\nAttacks:\n");
            for attack in &card.attacks {
                let _ = writeln!(
                    out,
                    "- {} ({}) - {} damage",
                    attack.name, attack.energy_requirement, attack.damage
                );
                if !attack.effect.is_empty() {
                    let _ = writeln!(out, "  Effect: {}", attack.effect);
                }
            }
        }

        if let Some(weakness) = &card.weakness {
            let _ = writeln!(out, "\nWeakness: {}", weakness);
        }
        if let Some(resistance) = &card.resistance {
            let _ = writeln!(out, "Resistance: {}", resistance);
        }
        let _ = writeln!(out, "Retreat Cost: {}", card.retreat_cost);

        if let Some(rule) = &card.special_rule {
            let _ = writeln!(out, "\nSpecial Rule: {}", rule);
        }
        if let Some(illustrator) = &card.illustrator {
            let _ = writeln!(out, "Illustrated by: {}", illustrator);
        }

        out.push_str("\n---\n\n");
    }
}

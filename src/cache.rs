//! Process-lifetime in-memory card store.
//!
//! Every fetch and search path writes records here as a side effect; the
//! search fallback reads it. Keyed by `(set_id, card_id)` with at most one
//! record per key. Grows without bound for the life of the process -- there
//! is no eviction and no persistence, a deliberate simplicity/memory
//! trade-off.

use crate::models::Card;

/// Insertion-ordered card store with keyed replacement.
///
/// Construct one at process start (it lives inside
/// [`Connection`](crate::connection::Connection)) rather than reaching for
/// hidden global state.
#[derive(Debug, Default)]
pub struct CardCache {
    cards: Vec<Card>,
}

impl CardCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    fn position(&self, set_id: &str, card_id: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|c| c.set_id == set_id && c.id == card_id)
    }

    pub fn contains(&self, set_id: &str, card_id: &str) -> bool {
        self.position(set_id, card_id).is_some()
    }

    pub fn get(&self, set_id: &str, card_id: &str) -> Option<&Card> {
        self.position(set_id, card_id).map(|i| &self.cards[i])
    }

    /// Insert a record, replacing any existing entry with the same key in
    /// place. Idempotent under replay: upserting the same record twice
    /// leaves exactly one entry carrying the latest fields.
    pub fn upsert(&mut self, card: Card) {
        match self.position(&card.set_id, &card.id) {
            Some(i) => self.cards[i] = card,
            None => self.cards.push(card),
        }
    }

    /// Insert only when the key is absent. Listing pages produce partial
    /// records and must not clobber an authoritative entry from an earlier
    /// detail fetch. Returns whether the record was inserted.
    pub fn insert_if_absent(&mut self, card: Card) -> bool {
        if self.contains(&card.set_id, &card.id) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Linear scan returning clones of every record the predicate accepts,
    /// in insertion order.
    pub fn filter(&self, predicate: impl Fn(&Card) -> bool) -> Vec<Card> {
        self.cards.iter().filter(|c| predicate(c)).cloned().collect()
    }

    /// Case-insensitive substring scan over name and type, in insertion
    /// order. This is the fallback path when the live site search fails or
    /// yields nothing.
    pub fn search(&self, query: &str) -> Vec<Card> {
        let q = query.to_lowercase();
        self.filter(|c| {
            c.name.to_lowercase().contains(&q) || c.type_field.to_lowercase().contains(&q)
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

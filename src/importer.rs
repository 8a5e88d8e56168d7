//! Deck-list plain-text parsing.
//!
//! Accepts the common paste format:
//!
//! ```text
//! Pokémon: 5
//! 2 Pikachu ex A2b 22
//! 1 Charizard ex A2b 10
//! 2 Bulbasaur A1 1
//! Trainer: 0
//! ```
//!
//! Section headers are skipped; each remaining line must be
//! `count name setId cardId`. The actual card data comes from per-entry
//! detail fetches in [`PocketSdk::import_deck`](crate::PocketSdk::import_deck).

use std::sync::LazyLock;

use regex::Regex;

use crate::deck::{Deck, DeckError};
use crate::error::Result;

static ENTRY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\s+(.*?)\s+([A-Za-z0-9]+)\s+(\d+)$").expect("valid regex")
});

/// One parsed deck-list line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckListEntry {
    pub count: u32,
    pub name: String,
    pub set_id: String,
    pub card_id: String,
}

/// The outcome of a bulk import: the assembled deck plus how many cards the
/// size cap dropped.
#[derive(Debug)]
pub struct DeckImport {
    pub deck: Deck,
    pub dropped: usize,
}

/// Parse a pasted deck list into entries.
///
/// Blank lines and section headers (a colon with no leading count, like
/// `"Pokémon: 5"`) are skipped; lines that fit no known shape are ignored
/// with a debug log. If nothing parses, the whole list is rejected.
pub fn parse_deck_list(text: &str) -> Result<Vec<DeckListEntry>> {
    let mut entries = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.contains(':') && !line.starts_with(|c: char| c.is_ascii_digit()) {
            log::debug!("skipping section header {:?}", line);
            continue;
        }
        let Some(caps) = ENTRY.captures(line) else {
            log::debug!("skipping unrecognized deck-list line {:?}", line);
            continue;
        };
        let count: u32 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => {
                log::debug!("skipping line with oversized count {:?}", line);
                continue;
            }
        };
        entries.push(DeckListEntry {
            count,
            name: caps[2].trim().to_string(),
            set_id: caps[3].to_string(),
            card_id: caps[4].to_string(),
        });
    }

    if entries.is_empty() {
        return Err(DeckError::NoEntries.into());
    }
    Ok(entries)
}

//! SDK for the Pokémon TCG Pocket card database.
//!
//! The card catalog is not owned data: every attribute is scraped out of
//! the source site's HTML at request time, with an in-memory cache as a
//! secondary fallback. Detail pages yield authoritative records; search,
//! browse, and set listings yield partial ones. Deck assembly rules
//! (60-card cap, 4-copy limit, grouping, export) operate purely on the
//! resulting records.
//!
//! # Quick start
//!
//! ```no_run
//! use pocket_tcg_sdk::PocketSdk;
//!
//! let sdk = PocketSdk::builder().build().unwrap();
//!
//! // Look up one card (never errors; failures become None)
//! let card = sdk.cards().get("A2b", "22");
//!
//! // Search, falling back to the cache when the site is unreachable
//! let results = sdk.cards().search("pikachu");
//!
//! // Import a pasted deck list
//! let import = sdk.import_deck("2 Pikachu ex A2b 22\n1 Charizard ex A2b 10").unwrap();
//! println!("{}", import.deck.export_text());
//! ```

#[cfg(feature = "async")]
pub mod async_client;
pub mod cache;
pub mod config;
pub mod connection;
pub mod deck;
pub mod error;
pub mod extract;
pub mod importer;
pub mod models;
pub mod queries;

#[cfg(feature = "async")]
pub use async_client::AsyncPocketSdk;
pub use cache::CardCache;
pub use connection::Connection;
pub use deck::{Deck, DeckError};
pub use error::{PocketError, Result};
pub use importer::DeckImport;
pub use models::{Attack, Card, SetInfo};

use std::fmt;
use std::time::Duration;

// ---------------------------------------------------------------------------
// PocketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PocketSdk`] instance.
///
/// Use [`PocketSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](PocketSdkBuilder::build) to create the SDK.
pub struct PocketSdkBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl Default for PocketSdkBuilder {
    fn default() -> Self {
        Self {
            base_url: config::DEFAULT_BASE_URL.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl PocketSdkBuilder {
    /// Override the card database site's base URL. Mainly useful for
    /// pointing tests at a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the outbound HTTP request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the SDK, initializing the HTTP client and an empty card cache.
    /// No network traffic happens until the first query.
    pub fn build(self) -> Result<PocketSdk> {
        let conn = Connection::new(self.base_url, self.timeout, &self.user_agent)?;
        Ok(PocketSdk { conn })
    }
}

// ---------------------------------------------------------------------------
// PocketSdk
// ---------------------------------------------------------------------------

/// The main entry point.
///
/// Wraps a [`Connection`] (which owns the HTTP client and the in-memory
/// [`CardCache`]) and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`PocketSdk::builder()`].
pub struct PocketSdk {
    conn: Connection,
}

impl PocketSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> PocketSdkBuilder {
        PocketSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the card query interface: detail fetch, search, browse, and
    /// per-set listings.
    pub fn cards(&self) -> queries::cards::CardQuery<'_> {
        queries::cards::CardQuery::new(&self.conn)
    }

    /// Access the set query interface. Sets are fetched fresh on every
    /// call and never cached.
    pub fn sets(&self) -> queries::sets::SetQuery<'_> {
        queries::sets::SetQuery::new(&self.conn)
    }

    // -- Deck import -------------------------------------------------------

    /// Parse a pasted deck list and assemble a [`Deck`] by fetching full
    /// details for every entry.
    ///
    /// A failed detail fetch aborts the import with an error naming the
    /// offending card, so callers can report which line failed. Imports
    /// over the size cap are truncated, with the dropped count reported in
    /// the returned [`DeckImport`].
    pub fn import_deck(&self, text: &str) -> Result<DeckImport> {
        let entries = importer::parse_deck_list(text)?;

        let mut cards = Vec::new();
        for entry in entries {
            let card = self.cards().fetch(&entry.set_id, &entry.card_id).map_err(|e| {
                DeckError::ImportFetch {
                    name: entry.name.clone(),
                    set_id: entry.set_id.clone(),
                    card_id: entry.card_id.clone(),
                    reason: e.to_string(),
                }
            })?;
            for _ in 0..entry.count {
                cards.push(card.clone());
            }
        }

        let (deck, dropped) = Deck::from_import(cards);
        if dropped > 0 {
            log::warn!("imported deck exceeded the size cap; dropped {} cards", dropped);
        }
        Ok(DeckImport { deck, dropped })
    }

    // -- Plumbing ----------------------------------------------------------

    /// Return a reference to the underlying [`Connection`] for advanced
    /// usage (direct cache access lives at `connection().cache`).
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for PocketSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PocketSdk(base_url={}, cached_cards={})",
            self.conn.base_url(),
            self.conn.cache.borrow().len()
        )
    }
}

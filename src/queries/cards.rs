//! Card page fetchers: detail, search, browse, and per-set listings.
//!
//! Each fetch issues one GET against a fixed URL template, locates the
//! relevant regions by the site's class selectors, and drives the
//! extractors in [`crate::extract`] to build card records. The selectors
//! are deliberately coupled to the source site's markup; an upstream layout
//! change breaks them, and that brittleness is inherent to the domain.
//!
//! Parsing is split from fetching: the `parse_*` functions take an
//! already-parsed document so they can be exercised offline against fixture
//! HTML.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config;
use crate::connection::Connection;
use crate::error::{PocketError, Result};
use crate::extract::{extract_attacks, parse_card_text, AttackFragment};
use crate::models::Card;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid selector")
}

static CARD_DETAILS: LazyLock<Selector> = LazyLock::new(|| selector(".card-details"));
static ATTACK_INFO: LazyLock<Selector> = LazyLock::new(|| selector(".card-text-attack-info"));
static ATTACK_EFFECT: LazyLock<Selector> = LazyLock::new(|| selector(".card-text-attack-effect"));
static ATTACK_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".attack-name"));
static ENERGY_IMG: LazyLock<Selector> = LazyLock::new(|| selector("img.energy-symbol"));
static CARD_IMAGE: LazyLock<Selector> = LazyLock::new(|| selector(".card-image img"));
static CARD_RARITY: LazyLock<Selector> = LazyLock::new(|| selector(".card-rarity"));
static SEARCH_GRID: LazyLock<Selector> = LazyLock::new(|| selector(".card-search-grid"));
static BROWSE_RESULT: LazyLock<Selector> = LazyLock::new(|| selector(".card-browse-result"));
static SET_RESULT: LazyLock<Selector> = LazyLock::new(|| selector(".card-set-result"));
static CARD_NAME: LazyLock<Selector> = LazyLock::new(|| selector(".card-name"));
static CARD_TYPE: LazyLock<Selector> = LazyLock::new(|| selector(".card-type"));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a"));
static IMG: LazyLock<Selector> = LazyLock::new(|| selector("img"));

/// Card links look like `/cards/{setId}/{cardId}`.
static CARD_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/cards/([^/]+)/([^/]+)").expect("valid regex"));

/// Flatten an element's text content to a single whitespace-normalized
/// string, the way the text probes expect it.
fn flatten_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// CardQuery
// ---------------------------------------------------------------------------

/// Query interface for cards, backed by live page fetches with the shared
/// in-memory cache as a fallback.
pub struct CardQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CardQuery<'a> {
    /// Create a new `CardQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    // -- Detail fetch ------------------------------------------------------

    /// Fetch the detail page and build an authoritative record.
    ///
    /// The record is upserted into the cache, replacing any partial entry
    /// from an earlier listing. Errors propagate so bulk callers (deck
    /// import) can name the card that failed.
    pub fn fetch(&self, set_id: &str, card_id: &str) -> Result<Card> {
        let url = config::card_url(self.conn.base_url(), set_id, card_id);
        let doc = self.conn.get_document(&url, &[])?;
        let card = parse_detail_page(&doc, set_id, card_id);
        self.conn.cache.borrow_mut().upsert(card.clone());
        Ok(card)
    }

    /// The never-raises boundary around [`fetch`](Self::fetch): any failure
    /// is logged and becomes `None`.
    pub fn get(&self, set_id: &str, card_id: &str) -> Option<Card> {
        match self.fetch(set_id, card_id) {
            Ok(card) => Some(card),
            Err(e) => {
                log::warn!("failed to fetch card {}/{}: {}", set_id, card_id, e);
                None
            }
        }
    }

    // -- Search ------------------------------------------------------------

    /// Search the live site; on zero results or any website-path failure,
    /// fall back to a case-insensitive substring scan of the cache. Never
    /// errors.
    pub fn search(&self, query: &str) -> Vec<Card> {
        match self.search_site(query) {
            Ok(results) if !results.is_empty() => results,
            Ok(_) => {
                log::debug!("site search for {:?} found nothing; trying cache", query);
                self.conn.cache.borrow().search(query)
            }
            Err(e) => {
                log::warn!("site search for {:?} failed: {}; trying cache", query, e);
                self.conn.cache.borrow().search(query)
            }
        }
    }

    fn search_site(&self, query: &str) -> Result<Vec<Card>> {
        let url = config::cards_url(self.conn.base_url());
        let doc = self.conn.get_document(&url, &[("q", query)])?;
        let results = parse_search_page(&doc)?;
        let mut cache = self.conn.cache.borrow_mut();
        for card in &results {
            cache.insert_if_absent(card.clone());
        }
        Ok(results)
    }

    // -- Listings ----------------------------------------------------------

    /// Browse the full catalog, paginated. Partial records only; failures
    /// are logged and become an empty list.
    pub fn all(&self, page: usize, limit: usize) -> Vec<Card> {
        self.try_all(page, limit).unwrap_or_else(|e| {
            log::warn!("browse page {} failed: {}", page, e);
            Vec::new()
        })
    }

    fn try_all(&self, page: usize, limit: usize) -> Result<Vec<Card>> {
        let url = config::cards_url(self.conn.base_url());
        let page = page.to_string();
        let limit = limit.to_string();
        let doc = self
            .conn
            .get_document(&url, &[("page", &page), ("limit", &limit)])?;
        let results = parse_browse_page(&doc);
        let mut cache = self.conn.cache.borrow_mut();
        for card in &results {
            cache.insert_if_absent(card.clone());
        }
        Ok(results)
    }

    /// List the cards of one set. Partial records only; failures are logged
    /// and become an empty list.
    pub fn by_set(&self, set_id: &str) -> Vec<Card> {
        self.try_by_set(set_id).unwrap_or_else(|e| {
            log::warn!("set listing for {} failed: {}", set_id, e);
            Vec::new()
        })
    }

    fn try_by_set(&self, set_id: &str) -> Result<Vec<Card>> {
        let url = config::cards_url(self.conn.base_url());
        let doc = self.conn.get_document(&url, &[("set", set_id)])?;
        let results = parse_set_page(&doc, set_id);
        let mut cache = self.conn.cache.borrow_mut();
        for card in &results {
            cache.insert_if_absent(card.clone());
        }
        Ok(results)
    }
}

// ---------------------------------------------------------------------------
// Page parsing
// ---------------------------------------------------------------------------

/// Build an authoritative record from a detail-page document.
///
/// The condensed `.card-details` text is probed first; when the page also
/// carries structured attack regions, their extraction replaces the text
/// probe's single-attack guess.
pub fn parse_detail_page(doc: &Html, set_id: &str, card_id: &str) -> Card {
    let details_text = doc
        .select(&CARD_DETAILS)
        .next()
        .map(flatten_text)
        .unwrap_or_default();
    let parsed = parse_card_text(&details_text);

    let effects: Vec<String> = doc.select(&ATTACK_EFFECT).map(flatten_text).collect();
    let fragments: Vec<AttackFragment> = doc
        .select(&ATTACK_INFO)
        .enumerate()
        .map(|(i, info)| AttackFragment {
            name: info.select(&ATTACK_NAME).next().map(flatten_text),
            text: flatten_text(info),
            energy_images: info
                .select(&ENERGY_IMG)
                .map(|img| {
                    (
                        img.value().attr("src").unwrap_or("").to_string(),
                        img.value().attr("alt").unwrap_or("").to_string(),
                    )
                })
                .collect(),
            effect: effects.get(i).cloned(),
        })
        .collect();

    let structured = extract_attacks(&fragments);
    let attacks = if structured.is_empty() {
        parsed.attack.into_iter().collect()
    } else {
        structured
    };

    let image_url = doc
        .select(&CARD_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or("")
        .to_string();

    let rarity = doc
        .select(&CARD_RARITY)
        .next()
        .map(flatten_text)
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "Unknown".to_string());

    Card {
        id: card_id.to_string(),
        set_id: set_id.to_string(),
        name: parsed.name,
        image_url,
        type_field: parsed.type_field,
        hp: parsed.hp,
        category: parsed.category,
        stage: parsed.stage,
        rarity,
        attacks,
        weakness: parsed.weakness,
        resistance: None,
        retreat_cost: parsed.retreat_cost,
        special_rule: parsed.special_rule,
        illustrator: parsed.illustrator,
    }
}

/// Partial records from the search grid's card anchors.
///
/// A missing grid region is an error (the site answered with something that
/// is not a results page); an anchor with an unparsable href is skipped.
pub fn parse_search_page(doc: &Html) -> Result<Vec<Card>> {
    let grid = doc
        .select(&SEARCH_GRID)
        .next()
        .ok_or_else(|| PocketError::Parse("missing .card-search-grid region".to_string()))?;

    let mut cards = Vec::new();
    for anchor in grid.select(&ANCHOR) {
        let href = anchor.value().attr("href").unwrap_or("");
        let Some(caps) = CARD_HREF.captures(href) else {
            log::debug!("skipping card anchor with unparsable href {:?}", href);
            continue;
        };
        let image_url = anchor
            .select(&IMG)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or("");
        let name = anchor
            .select(&CARD_NAME)
            .next()
            .map(flatten_text)
            .unwrap_or_default();
        let type_field = anchor
            .select(&CARD_TYPE)
            .next()
            .map(flatten_text)
            .unwrap_or_default();
        cards.push(Card::partial(&caps[1], &caps[2], name, type_field, image_url));
    }
    Ok(cards)
}

/// Partial records from the browse listing. Both ids come from each
/// result's card link.
pub fn parse_browse_page(doc: &Html) -> Vec<Card> {
    doc.select(&BROWSE_RESULT)
        .filter_map(|element| partial_from_listing(element, None))
        .collect()
}

/// Partial records from a per-set listing; the set id is taken from the
/// request, not the markup.
pub fn parse_set_page(doc: &Html, set_id: &str) -> Vec<Card> {
    doc.select(&SET_RESULT)
        .filter_map(|element| partial_from_listing(element, Some(set_id)))
        .collect()
}

fn partial_from_listing(element: ElementRef, set_id: Option<&str>) -> Option<Card> {
    let href = element
        .select(&ANCHOR)
        .next()
        .and_then(|a| a.value().attr("href"))
        .unwrap_or("");
    let caps = CARD_HREF.captures(href)?;
    let set_id = set_id.unwrap_or(&caps[1]);

    let image_url = element
        .select(&IMG)
        .next()
        .and_then(|img| img.value().attr("src"))
        .unwrap_or("");
    let name = element
        .select(&CARD_NAME)
        .next()
        .map(flatten_text)
        .unwrap_or_default();
    let type_field = element
        .select(&CARD_TYPE)
        .next()
        .map(flatten_text)
        .unwrap_or_default();

    Some(Card::partial(set_id, &caps[2], name, type_field, image_url))
}

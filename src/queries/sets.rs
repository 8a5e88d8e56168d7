//! Set index fetcher.
//!
//! Sets are cheap to list and change rarely but unpredictably, so they are
//! fetched fresh on every call and never cached.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};

use crate::config;
use crate::connection::Connection;
use crate::error::Result;
use crate::models::SetInfo;

static SET_ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".set-item").expect("valid selector"));
static SET_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".set-name").expect("valid selector"));
static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("valid selector"));

/// Set links look like `/sets/{setId}`.
static SET_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/sets/([^/]+)").expect("valid regex"));

// ---------------------------------------------------------------------------
// SetQuery
// ---------------------------------------------------------------------------

/// Query interface for the sets index page.
pub struct SetQuery<'a> {
    conn: &'a Connection,
}

impl<'a> SetQuery<'a> {
    /// Create a new `SetQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// List every set on the index page. Failures are logged and become an
    /// empty list.
    pub fn list(&self) -> Vec<SetInfo> {
        self.try_list().unwrap_or_else(|e| {
            log::warn!("sets index fetch failed: {}", e);
            Vec::new()
        })
    }

    fn try_list(&self) -> Result<Vec<SetInfo>> {
        let url = config::sets_url(self.conn.base_url());
        let doc = self.conn.get_document(&url, &[])?;
        Ok(parse_sets_page(&doc))
    }
}

/// Extract `(id, name)` pairs from the sets index document. Items without a
/// parsable set link are skipped.
pub fn parse_sets_page(doc: &Html) -> Vec<SetInfo> {
    doc.select(&SET_ITEM)
        .filter_map(|item| {
            let href = item
                .select(&ANCHOR)
                .next()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or("");
            let caps = SET_HREF.captures(href)?;
            let name = item
                .select(&SET_NAME)
                .next()
                .map(|n| {
                    n.text()
                        .collect::<String>()
                        .split_whitespace()
                        .collect::<Vec<_>>()
                        .join(" ")
                })
                .unwrap_or_default();
            Some(SetInfo {
                id: caps[1].to_string(),
                name,
            })
        })
        .collect()
}

//! HTTP connection wrapper owning the shared card cache.
//!
//! Every page fetcher goes through [`Connection::get_document`], which
//! issues one GET against the external site and parses the body into a
//! `scraper::Html` tree. The cache lives here so that a single explicitly
//! constructed store is passed by reference into every fetch and search
//! path.

use std::cell::RefCell;

use reqwest::blocking::Client;
use scraper::Html;

use crate::cache::CardCache;
use crate::error::Result;

/// Wraps the blocking HTTP client, the site base URL, and the in-memory
/// card cache.
///
/// The cache sits behind a `RefCell`: the SDK core is single-threaded, so
/// interior mutability is all the mutual exclusion the read-modify-write
/// paths need. The async wrapper serializes access with a `Mutex` around
/// the whole SDK instead.
pub struct Connection {
    client: Client,
    base_url: String,
    /// The card store populated as a side effect of every fetch and search.
    pub cache: RefCell<CardCache>,
}

impl Connection {
    /// Build a connection with the given base URL, request timeout, and
    /// user agent.
    pub fn new(
        base_url: String,
        timeout: std::time::Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base_url,
            cache: RefCell::new(CardCache::new()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a page and parse the body into a document tree.
    ///
    /// A non-success status is an error; no retry is attempted. Missing
    /// regions inside the document are the caller's concern.
    pub fn get_document(&self, url: &str, query: &[(&str, &str)]) -> Result<Html> {
        log::debug!("GET {} {:?}", url, query);
        let resp = self
            .client
            .get(url)
            .query(query)
            .send()?
            .error_for_status()?;
        let body = resp.text()?;
        Ok(Html::parse_document(&body))
    }
}

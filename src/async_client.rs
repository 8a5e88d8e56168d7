//! Async wrapper around [`PocketSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free while
//! a page fetch is in flight. The whole SDK sits behind an `Arc<Mutex<_>>`,
//! which is the explicit mutual exclusion the shared card cache needs once
//! operations can run from parallel worker threads.
//!
//! # Example
//!
//! ```no_run
//! use pocket_tcg_sdk::AsyncPocketSdk;
//!
//! async fn demo() {
//!     let sdk = AsyncPocketSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let results = sdk.run(|s| Ok(s.cards().search("pikachu"))).await.unwrap();
//!
//!     // Convenience wrappers for the common operations
//!     let card = sdk.get_card("A2b", "22").await;
//!     let import = sdk.import_deck("2 Pikachu ex A2b 22".to_string()).await.unwrap();
//!     # let _ = (results, card, import);
//! }
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{PocketError, Result};
use crate::importer::DeckImport;
use crate::models::{Card, SetInfo};
use crate::PocketSdk;

// ---------------------------------------------------------------------------
// AsyncPocketSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncPocketSdk`] instance.
pub struct AsyncPocketSdkBuilder {
    inner: crate::PocketSdkBuilder,
}

impl Default for AsyncPocketSdkBuilder {
    fn default() -> Self {
        Self {
            inner: crate::PocketSdkBuilder::default(),
        }
    }
}

impl AsyncPocketSdkBuilder {
    /// Override the card database site's base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.inner = self.inner.base_url(base_url);
        self
    }

    /// Set the outbound HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.inner = self.inner.timeout(timeout);
        self
    }

    /// Set the User-Agent header sent with every request.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.inner = self.inner.user_agent(user_agent);
        self
    }

    /// Build the async SDK. Initialization runs on the blocking thread pool
    /// so it won't block the async event loop.
    pub async fn build(self) -> Result<AsyncPocketSdk> {
        let inner = self.inner;
        tokio::task::spawn_blocking(move || {
            let sdk = inner.build()?;
            Ok(AsyncPocketSdk {
                inner: Arc::new(Mutex::new(sdk)),
            })
        })
        .await
        .map_err(|e| PocketError::Parse(format!("blocking task panicked: {}", e)))?
    }
}

// ---------------------------------------------------------------------------
// AsyncPocketSdk
// ---------------------------------------------------------------------------

/// Clonable async handle to a shared [`PocketSdk`].
#[derive(Clone)]
pub struct AsyncPocketSdk {
    inner: Arc<Mutex<PocketSdk>>,
}

impl AsyncPocketSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncPocketSdkBuilder {
        AsyncPocketSdkBuilder::default()
    }

    /// Run any sync SDK operation on the blocking thread pool.
    ///
    /// The closure holds the SDK lock for its full duration, so concurrent
    /// callers interleave one at a time -- the cache's read-modify-write
    /// sequences stay uninterrupted.
    pub async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&PocketSdk) -> Result<T> + Send + 'static,
    {
        let inner = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let sdk = inner
                .lock()
                .map_err(|_| PocketError::Parse("SDK lock poisoned".to_string()))?;
            f(&sdk)
        })
        .await
        .map_err(|e| PocketError::Parse(format!("blocking task panicked: {}", e)))?
    }

    // -- Convenience wrappers ----------------------------------------------

    /// Async counterpart of [`CardQuery::get`](crate::queries::cards::CardQuery::get).
    pub async fn get_card(&self, set_id: &str, card_id: &str) -> Option<Card> {
        let set_id = set_id.to_string();
        let card_id = card_id.to_string();
        self.run(move |s| Ok(s.cards().get(&set_id, &card_id)))
            .await
            .ok()
            .flatten()
    }

    /// Async counterpart of [`CardQuery::search`](crate::queries::cards::CardQuery::search).
    pub async fn search(&self, query: &str) -> Vec<Card> {
        let query = query.to_string();
        self.run(move |s| Ok(s.cards().search(&query)))
            .await
            .unwrap_or_default()
    }

    /// Async counterpart of [`SetQuery::list`](crate::queries::sets::SetQuery::list).
    pub async fn sets(&self) -> Vec<SetInfo> {
        self.run(|s| Ok(s.sets().list())).await.unwrap_or_default()
    }

    /// Async counterpart of [`PocketSdk::import_deck`]. The deck-list
    /// entries are fetched as one batch on the blocking pool; results come
    /// back in entry order regardless of completion order.
    pub async fn import_deck(&self, text: String) -> Result<DeckImport> {
        self.run(move |s| s.import_deck(&text)).await
    }
}

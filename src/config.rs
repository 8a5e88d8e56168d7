use std::time::Duration;

/// The card database site this SDK scrapes. The markup selectors throughout
/// `queries/` are coupled to this site's page structure.
pub const DEFAULT_BASE_URL: &str = "https://pocket.limitlesstcg.com";

/// Outbound request timeout. A hung external request would otherwise hang the
/// dependent operation indefinitely.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_USER_AGENT: &str = concat!("pocket-tcg-sdk/", env!("CARGO_PKG_VERSION"));

/// Detail page for a single card.
pub fn card_url(base: &str, set_id: &str, card_id: &str) -> String {
    format!("{}/cards/{}/{}", base, set_id, card_id)
}

/// Search, browse, and per-set listings all live under `/cards`; they differ
/// only in query parameters (`q`, `page`/`limit`, `set`).
pub fn cards_url(base: &str) -> String {
    format!("{}/cards", base)
}

/// Sets index page.
pub fn sets_url(base: &str) -> String {
    format!("{}/sets", base)
}

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SetInfo — Summary info for a card set
// ---------------------------------------------------------------------------

/// A card set as listed on the sets index page.
///
/// Sets are sourced fresh from the index on every call and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetInfo {
    pub id: String,
    pub name: String,
}

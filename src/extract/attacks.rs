//! Structured attack extraction from the detail page's dedicated attack
//! regions.
//!
//! The page fetcher pairs each `.card-text-attack-info` region with the
//! `.card-text-attack-effect` region at the same index while it still has
//! the document in hand, so this module only ever sees one ordered sequence
//! of [`AttackFragment`]s and cannot misalign two separately-indexed lists.

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::energy;
use crate::models::Attack;

static TRAILING_DAMAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)$").expect("valid regex"));

// ---------------------------------------------------------------------------
// AttackFragment
// ---------------------------------------------------------------------------

/// One attack-info region paired with its effect region, reduced to the
/// pieces extraction needs.
#[derive(Debug, Clone, Default)]
pub struct AttackFragment {
    /// Text of the `.attack-name` sub-element, when the region has one.
    pub name: Option<String>,
    /// Full flattened text of the info region.
    pub text: String,
    /// `(src, alt)` of every embedded `img.energy-symbol`, document order.
    pub energy_images: Vec<(String, String)>,
    /// Text of the paired effect region; `None` when the effect list ran
    /// short.
    pub effect: Option<String>,
}

/// Build the structured attack list, one [`Attack`] per fragment.
///
/// Contract with the text extractor: a non-empty result replaces its weak
/// single-attack guess; an empty result leaves the guess intact. Callers
/// honor that in [`crate::queries::cards::parse_detail_page`].
pub fn extract_attacks(fragments: &[AttackFragment]) -> Vec<Attack> {
    fragments.iter().map(extract_one).collect()
}

fn extract_one(fragment: &AttackFragment) -> Attack {
    let text = fragment.text.trim();

    let name = match &fragment.name {
        Some(n) => n.trim().to_string(),
        // Fall back to the region text with the trailing damage run
        // stripped.
        None => TRAILING_DAMAGE.replace(text, "").trim().to_string(),
    };

    let damage = TRAILING_DAMAGE
        .captures(text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let energy_requirement = if fragment.energy_images.is_empty() {
        energy::first_energy_run(text).unwrap_or_default().to_string()
    } else {
        fragment
            .energy_images
            .iter()
            .map(|(src, alt)| energy::decode_image(src, alt))
            .collect()
    };

    let effect = fragment
        .effect
        .as_deref()
        .map(str::trim)
        .unwrap_or_default()
        .to_string();

    Attack {
        name,
        damage,
        effect,
        energy_requirement,
    }
}

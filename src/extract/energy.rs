//! Energy-symbol decoding.
//!
//! The source site renders attack costs either as `img.energy-symbol`
//! elements or as bare letter runs in text ("LLL" for three Lightning).
//! Both forms decode to the same one-letter code set:
//! L (Lightning), F (Fire and Fighting), W (Water), G (Grass), P (Psychic),
//! D (Darkness), M (Metal), C (Colorless).

/// The valid energy-code letters.
pub const ENERGY_LETTERS: &str = "LFWGPDMC";

/// Keyword table for image-based symbols, matched case-insensitively against
/// both `src` and `alt`. Fire and Fighting share a code in the source data.
const IMAGE_KEYWORDS: [(&str, char); 9] = [
    ("lightning", 'L'),
    ("fire", 'F'),
    ("water", 'W'),
    ("grass", 'G'),
    ("psychic", 'P'),
    ("fighting", 'F'),
    ("darkness", 'D'),
    ("metal", 'M'),
    ("colorless", 'C'),
];

pub fn is_energy_letter(c: char) -> bool {
    ENERGY_LETTERS.contains(c)
}

/// Decode an energy-symbol image to its one-letter code from the `src` and
/// `alt` attributes.
///
/// Unmatched images decode to 'C'. That default mirrors the source data's
/// behavior and is indistinguishable from a genuine Colorless symbol; it is
/// kept for compatibility rather than introducing an explicit unknown
/// marker.
pub fn decode_image(src: &str, alt: &str) -> char {
    let src = src.to_lowercase();
    let alt = alt.to_lowercase();
    for (keyword, code) in IMAGE_KEYWORDS {
        if src.contains(keyword) || alt.contains(keyword) {
            return code;
        }
    }
    'C'
}

/// Decode a textual energy run. Input already filtered to the valid letter
/// set comes back unchanged; anything else is dropped.
pub fn decode_text(run: &str) -> String {
    run.chars().filter(|c| is_energy_letter(*c)).collect()
}

/// The first maximal run of energy letters in `text`, if any. Used when an
/// attack fragment carries no symbol images.
pub fn first_energy_run(text: &str) -> Option<&str> {
    let start = text.find(is_energy_letter)?;
    let rest = &text[start..];
    let end = rest
        .find(|c| !is_energy_letter(c))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

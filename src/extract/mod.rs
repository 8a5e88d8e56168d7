//! The scraping core: turns flattened page text and DOM fragments into
//! typed card fields.
//!
//! Extraction never errors. A pattern that finds no match is an ordinary
//! absent result and leaves the field at its default; only the page
//! fetchers in [`crate::queries`] deal in failures.

pub mod attacks;
pub mod energy;
pub mod text;

pub use attacks::{extract_attacks, AttackFragment};
pub use text::{parse_card_text, CardText};

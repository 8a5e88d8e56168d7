//! Query modules for the SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and wraps one external
//! page type: fetch, locate regions, extract, cache. Pure `parse_*`
//! functions over an already-parsed document sit alongside the fetching
//! methods so the scraping logic is testable without a network.

pub mod cards;
pub mod sets;

pub use cards::CardQuery;
pub use sets::SetQuery;

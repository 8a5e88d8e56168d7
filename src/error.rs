#[derive(Debug, thiserror::Error)]
pub enum PocketError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Deck error: {0}")]
    Deck(#[from] crate::deck::DeckError),
}

pub type Result<T> = std::result::Result<T, PocketError>;

use thiserror::Error;

use crate::data::models::DeckId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid group kind '{0}' (expected 'set' or 'house')")]
    InvalidGroupKind(String),

    #[error("Unknown set: {0}")]
    InvalidSet(String),

    #[error("Unknown house: {0}")]
    InvalidHouse(String),

    #[error("Match #{sequence_index} references unknown deck {deck}")]
    UnknownDeck { sequence_index: u32, deck: DeckId },

    #[error("Match #{sequence_index} pits deck {deck} against itself")]
    SelfMatch { sequence_index: u32, deck: DeckId },

    #[error("Deck {0} appears more than once in the deck table")]
    DuplicateDeck(DeckId),

    #[error("Match #{sequence_index} has {keys} keys forged (max 3)")]
    InvalidKeys { sequence_index: u32, keys: u8 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("CSV error in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
}

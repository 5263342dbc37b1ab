use crate::data::models::{Deck, DeckCatalog, Match};
use crate::error::AppError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const MAX_KEYS: u8 = 3;

pub fn load_decks(path: &Path) -> Result<DeckCatalog, AppError> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| AppError::Csv {
        path: source.clone(),
        source: e.into(),
    })?;
    read_decks(file, &source)
}

pub fn load_matches(path: &Path, catalog: &DeckCatalog) -> Result<Vec<Match>, AppError> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| AppError::Csv {
        path: source.clone(),
        source: e.into(),
    })?;
    read_matches(file, &source, catalog)
}

/// Reads a deck table: `id,name,set,house1,house2,house3,entry_date,SAS`.
pub fn read_decks<R: Read>(reader: R, source: &str) -> Result<DeckCatalog, AppError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let decks = rdr
        .deserialize::<Deck>()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AppError::Csv {
            path: source.to_string(),
            source: e,
        })?;

    DeckCatalog::new(decks)
}

/// Reads a match table and checks every row against the catalog, so that a
/// bad file is reported instead of tripping a lookup panic later on.
pub fn read_matches<R: Read>(
    reader: R,
    source: &str,
    catalog: &DeckCatalog,
) -> Result<Vec<Match>, AppError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut matches = Vec::new();
    for row in rdr.deserialize::<Match>() {
        let m = row.map_err(|e| AppError::Csv {
            path: source.to_string(),
            source: e,
        })?;
        validate_match(&m, catalog)?;
        matches.push(m);
    }

    Ok(matches)
}

fn validate_match(m: &Match, catalog: &DeckCatalog) -> Result<(), AppError> {
    for deck in [m.deck1_id, m.deck2_id] {
        if !catalog.contains(deck) {
            return Err(AppError::UnknownDeck {
                sequence_index: m.sequence_index,
                deck,
            });
        }
    }

    if m.deck1_id == m.deck2_id {
        return Err(AppError::SelfMatch {
            sequence_index: m.sequence_index,
            deck: m.deck1_id,
        });
    }

    for keys in [m.deck1_keys_forged, m.deck2_keys_forged] {
        if keys > MAX_KEYS {
            return Err(AppError::InvalidKeys {
                sequence_index: m.sequence_index,
                keys,
            });
        }
    }

    Ok(())
}

use super::match_matrix::{MatchMatrix, UNPLAYED, WINNING_KEYS};
use super::numeric::rate;
use crate::data::models::{Deck, DeckCatalog, DeckId};
use serde::Serialize;

/// Play, win and key totals for one deck or one group of decks.
///
/// The rate fields are `None` when there are no plays: "no data" is
/// reported separately from a 0% win rate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct DeckStats {
    pub plays: u32,
    pub wins: u32,
    pub keys_forged: u32,
    #[serde(skip)]
    keys_lost: u32,
    pub key_diff: i64,
    pub win_rate: Option<f64>,
    pub avg_keys_forged: Option<f64>,
    pub avg_key_diff: Option<f64>,
}

impl DeckStats {
    pub fn from_totals(plays: u32, wins: u32, keys_forged: u32, key_diff: i64) -> Self {
        DeckStats {
            plays,
            wins,
            keys_forged,
            keys_lost: (i64::from(keys_forged) - key_diff).max(0) as u32,
            key_diff,
            win_rate: rate(f64::from(wins), plays, 100.0, 1),
            avg_keys_forged: rate(f64::from(keys_forged), plays, 1.0, 1),
            avg_key_diff: rate(key_diff as f64, plays, 1.0, 1),
        }
    }

    /// Keys opponents forged against this deck.
    #[allow(dead_code)]
    pub fn keys_lost(&self) -> u32 {
        self.keys_lost
    }
}

/// Reads one deck's row (its own results) and column (its opponents'
/// results) from the matrix.
pub fn deck_stats(matrix: &MatchMatrix, deck: DeckId) -> DeckStats {
    let mut plays = 0;
    let mut wins = 0;
    let mut keys_forged: u32 = 0;

    for &cell in matrix.row(deck) {
        if cell == UNPLAYED {
            continue;
        }
        plays += 1;
        keys_forged += cell as u32;
        if cell == WINNING_KEYS {
            wins += 1;
        }
    }

    let keys_lost: u32 = matrix
        .column(deck)
        .filter(|&cell| cell != UNPLAYED)
        .map(|cell| cell as u32)
        .sum();

    let key_diff = i64::from(keys_forged) - i64::from(keys_lost);
    let mut stats = DeckStats::from_totals(plays, wins, keys_forged, key_diff);
    stats.keys_lost = keys_lost;
    stats
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedDeck {
    #[serde(flatten)]
    pub deck: Deck,
    #[serde(flatten)]
    pub stats: DeckStats,
}

/// Every deck of the catalog with its stats, in catalog order.
pub fn annotate_decks(catalog: &DeckCatalog, matrix: &MatchMatrix) -> Vec<AnnotatedDeck> {
    catalog
        .decks()
        .iter()
        .map(|deck| AnnotatedDeck {
            deck: deck.clone(),
            stats: deck_stats(matrix, deck.id),
        })
        .collect()
}

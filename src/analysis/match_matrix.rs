use crate::data::models::{DeckCatalog, DeckId, Match};
use serde::Serialize;
use std::collections::HashMap;

/// Cell value for an ordered deck pair with no recorded match.
pub const UNPLAYED: i32 = -1;

/// Keys forged by the winner of a match.
pub const WINNING_KEYS: i32 = 3;

/// Deck × deck result grid. `cell(i, j)` is the number of keys deck `i`
/// forged in its match against deck `j`, or [`UNPLAYED`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMatrix {
    ids: Vec<DeckId>,
    index: HashMap<DeckId, usize>,
    cells: Vec<i32>,
}

/// Serializable copy of the matrix, one row per deck in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatrixTable {
    pub decks: Vec<DeckId>,
    pub results: Vec<Vec<i32>>,
}

impl MatchMatrix {
    /// Empty matrix over every deck in the catalog.
    pub fn new(catalog: &DeckCatalog) -> Self {
        let ids: Vec<DeckId> = catalog.ids().collect();
        let index = ids.iter().enumerate().map(|(i, id)| (*id, i)).collect();
        let cells = vec![UNPLAYED; ids.len() * ids.len()];

        MatchMatrix { ids, index, cells }
    }

    /// Folds the match log in order. A later match for the same ordered pair
    /// replaces the earlier result.
    pub fn build(catalog: &DeckCatalog, matches: &[Match]) -> Self {
        let mut matrix = MatchMatrix::new(catalog);
        for m in matches {
            matrix.record(m);
        }
        matrix
    }

    pub fn record(&mut self, m: &Match) {
        let p1 = self.position(m.deck1_id);
        let p2 = self.position(m.deck2_id);
        let n = self.ids.len();

        self.cells[p1 * n + p2] = i32::from(m.deck1_keys_forged);
        self.cells[p2 * n + p1] = i32::from(m.deck2_keys_forged);
    }

    #[allow(dead_code)]
    pub fn deck_ids(&self) -> &[DeckId] {
        &self.ids
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Unordered deck pairs with a recorded match.
    pub fn played_pairs(&self) -> usize {
        let n = self.ids.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.cells[i * n + j] != UNPLAYED)
            .count()
    }

    /// Panics if `id` is not a deck of this matrix.
    pub fn position(&self, id: DeckId) -> usize {
        match self.index.get(&id) {
            Some(&position) => position,
            None => panic!("deck {} is not in the match matrix", id),
        }
    }

    pub fn get(&self, deck: DeckId, opponent: DeckId) -> i32 {
        let n = self.ids.len();
        self.cells[self.position(deck) * n + self.position(opponent)]
    }

    pub fn is_played(&self, deck: DeckId, opponent: DeckId) -> bool {
        self.get(deck, opponent) != UNPLAYED
    }

    /// Keys `deck` forged against every deck, in catalog order.
    pub fn row(&self, deck: DeckId) -> &[i32] {
        let n = self.ids.len();
        let start = self.position(deck) * n;
        &self.cells[start..start + n]
    }

    /// Keys every deck forged against `deck`, in catalog order.
    pub fn column(&self, deck: DeckId) -> impl Iterator<Item = i32> + '_ {
        let n = self.ids.len();
        let col = self.position(deck);
        (0..n).map(move |row| self.cells[row * n + col])
    }

    pub fn to_table(&self) -> MatrixTable {
        let n = self.ids.len();
        let results = if n == 0 {
            Vec::new()
        } else {
            self.cells.chunks(n).map(|row| row.to_vec()).collect()
        };

        MatrixTable {
            decks: self.ids.clone(),
            results,
        }
    }
}

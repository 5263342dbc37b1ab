use crate::data::models::{DeckCatalog, DeckSet, House};
use serde::Serialize;

/// Deck counts per (set, house), rows in set order and columns in house
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetHouseTable {
    pub sets: Vec<DeckSet>,
    pub houses: Vec<House>,
    pub counts: Vec<Vec<u32>>,
}

impl SetHouseTable {
    pub fn build(catalog: &DeckCatalog) -> Self {
        let mut counts = vec![vec![0; House::ALL.len()]; DeckSet::ALL.len()];

        for deck in catalog.decks() {
            let row = set_position(deck.set);
            for house in deck.houses() {
                counts[row][house_position(house)] += 1;
            }
        }

        SetHouseTable {
            sets: DeckSet::ALL.to_vec(),
            houses: House::ALL.to_vec(),
            counts,
        }
    }

    #[allow(dead_code)]
    pub fn count(&self, set: DeckSet, house: House) -> u32 {
        self.counts[set_position(set)][house_position(house)]
    }
}

// Variants are declared in `ALL` order
fn set_position(set: DeckSet) -> usize {
    set as usize
}

fn house_position(house: House) -> usize {
    house as usize
}

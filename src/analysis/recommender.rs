use super::deck_stats::AnnotatedDeck;
use super::group_pairwise::GroupPairwise;
use super::group_stats::Group;
use super::match_matrix::MatchMatrix;
use crate::data::models::{DeckId, DeckSet};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupRecommendation {
    pub set1: DeckSet,
    pub set2: DeckSet,
    pub set_plays: u32,
    pub deck1: DeckId,
    pub deck2: DeckId,
}

impl MatchupRecommendation {
    pub fn new(set1: DeckSet, set2: DeckSet, set_plays: u32, deck1: DeckId, deck2: DeckId) -> Self {
        MatchupRecommendation {
            set1,
            set2,
            set_plays,
            deck1,
            deck2,
        }
    }
}

pub struct MatchupRecommender;

impl MatchupRecommender {
    /// Picks the next match for the set pair with the fewest plays:
    /// - least-played cell of the set grid (first in row-major order)
    /// - each set's decks ranked by plays, fewest first
    /// - first pair in that order that has not met yet
    pub fn next_game(
        decks: &[AnnotatedDeck],
        matrix: &MatchMatrix,
        set_grid: &GroupPairwise,
    ) -> Option<MatchupRecommendation> {
        let (set1, set2, set_plays) = match set_grid.least_played()? {
            (Group::Set(set1), Group::Set(set2), plays) => (set1, set2, plays),
            _ => return None,
        };

        let ranked1 = Self::rank_by_plays(decks, set1);
        let ranked2 = Self::rank_by_plays(decks, set2);

        for &deck1 in &ranked1 {
            for &deck2 in &ranked2 {
                if deck1 != deck2 && !matrix.is_played(deck1, deck2) {
                    return Some(MatchupRecommendation::new(set1, set2, set_plays, deck1, deck2));
                }
            }
        }

        None
    }

    /// Decks of `set`, least played first. Ties keep catalog order.
    pub fn rank_by_plays(decks: &[AnnotatedDeck], set: DeckSet) -> Vec<DeckId> {
        let mut members: Vec<&AnnotatedDeck> = decks.iter().filter(|d| d.deck.set == set).collect();
        members.sort_by_key(|d| d.stats.plays);
        members.into_iter().map(|d| d.deck.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::deck_stats::annotate_decks;
    use crate::analysis::group_pairwise::group_pairwise;
    use crate::analysis::group_stats::GroupKind;
    use crate::analysis::test_support::{deck, game};
    use crate::data::models::{DeckCatalog, House};

    fn catalog() -> DeckCatalog {
        let houses = [House::Brobnar, House::Dis, House::Logos];
        let decks = DeckSet::ALL
            .iter()
            .enumerate()
            .flat_map(|(i, &set)| {
                let base = i as u32 * 10;
                vec![deck(base + 1, set, houses, 60.0), deck(base + 2, set, houses, 60.0)]
            })
            .collect();
        DeckCatalog::new(decks).unwrap()
    }

    fn recommend(catalog: &DeckCatalog, matches: &[crate::data::models::Match]) -> Option<MatchupRecommendation> {
        let matrix = MatchMatrix::build(catalog, matches);
        let decks = annotate_decks(catalog, &matrix);
        let grid = group_pairwise(&matrix, catalog, &GroupKind::Set.groups());
        MatchupRecommender::next_game(&decks, &matrix, &grid)
    }

    #[test]
    fn starts_with_first_set_mirror() {
        let catalog = catalog();
        let rec = recommend(&catalog, &[]).unwrap();
        assert_eq!(rec.set1, DeckSet::CallOfTheArchons);
        assert_eq!(rec.set2, DeckSet::CallOfTheArchons);
        assert_eq!(rec.set_plays, 0);
        assert_eq!((rec.deck1, rec.deck2), (1, 2));
    }

    #[test]
    fn moves_on_once_a_set_pair_has_played() {
        let catalog = catalog();
        let rec = recommend(&catalog, &[game(0, 1, 2, 3, 1)]).unwrap();
        assert_eq!(rec.set1, DeckSet::CallOfTheArchons);
        assert_eq!(rec.set2, DeckSet::AgeOfAscension);
        assert_eq!((rec.deck1, rec.deck2), (1, 11));
    }

    #[test]
    fn prefers_least_played_decks() {
        let catalog = catalog();
        // CotA mirror played; deck 1 has also met AoA deck 11
        let matches = [game(0, 1, 2, 3, 1), game(1, 1, 11, 3, 2)];
        let matrix = MatchMatrix::build(&catalog, &matches);
        let decks = annotate_decks(&catalog, &matrix);

        assert_eq!(MatchupRecommender::rank_by_plays(&decks, DeckSet::CallOfTheArchons), vec![2, 1]);

        let rec = recommend(&catalog, &matches).unwrap();
        // CotA vs AoA now has plays, CotA vs WC is the first empty pair
        assert_eq!(rec.set2, DeckSet::WorldsCollide);
        assert_eq!((rec.deck1, rec.deck2), (2, 21));
    }

    #[test]
    fn none_when_least_played_pair_is_exhausted() {
        let houses = [House::Brobnar, House::Dis, House::Logos];
        // Single deck: its only set pair is the mirror and it cannot face itself
        let catalog = DeckCatalog::new(vec![deck(1, DeckSet::CallOfTheArchons, houses, 60.0)]).unwrap();
        assert_eq!(recommend(&catalog, &[]), None);
    }
}

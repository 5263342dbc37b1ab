use super::group_stats::Group;
use super::match_matrix::{MatchMatrix, UNPLAYED, WINNING_KEYS};
use super::numeric::round_to;
use crate::data::models::{DeckCatalog, DeckId};
use serde::Serialize;

/// Marks a group pair that never met in `win_rate_grid`.
pub const NO_WIN_RATE: i32 = -1;

/// Group × group grids read straight off the match matrix. Row group is the
/// one whose decks' keys are counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupPairwise {
    pub groups: Vec<Group>,
    pub plays_grid: Vec<Vec<u32>>,
    pub win_rate_grid: Vec<Vec<i32>>,
}

impl GroupPairwise {
    /// Panics if `group` is not one of the grid's groups.
    #[allow(dead_code)]
    pub fn position(&self, group: Group) -> usize {
        match self.groups.iter().position(|g| *g == group) {
            Some(position) => position,
            None => panic!("group {} is not in the pairwise grid", group),
        }
    }

    #[allow(dead_code)]
    pub fn plays(&self, group: Group, opponent: Group) -> u32 {
        self.plays_grid[self.position(group)][self.position(opponent)]
    }

    #[allow(dead_code)]
    pub fn win_rate(&self, group: Group, opponent: Group) -> i32 {
        self.win_rate_grid[self.position(group)][self.position(opponent)]
    }

    /// Smallest play count in the grid, with its first cell in row-major
    /// order.
    pub fn least_played(&self) -> Option<(Group, Group, u32)> {
        let mut best: Option<(Group, Group, u32)> = None;
        for (i, row) in self.plays_grid.iter().enumerate() {
            for (j, &plays) in row.iter().enumerate() {
                if best.map_or(true, |(_, _, min)| plays < min) {
                    best = Some((self.groups[i], self.groups[j], plays));
                }
            }
        }
        best
    }
}

pub fn group_pairwise(matrix: &MatchMatrix, catalog: &DeckCatalog, groups: &[Group]) -> GroupPairwise {
    let members: Vec<Vec<DeckId>> = groups
        .iter()
        .map(|group| {
            catalog
                .decks()
                .iter()
                .filter(|deck| group.contains(deck))
                .map(|deck| deck.id)
                .collect()
        })
        .collect();

    let mut plays_grid = vec![vec![0; groups.len()]; groups.len()];
    let mut win_rate_grid = vec![vec![NO_WIN_RATE; groups.len()]; groups.len()];

    for (i, decks_1) in members.iter().enumerate() {
        for (j, decks_2) in members.iter().enumerate() {
            let (plays, wins) = count_results(matrix, decks_1, decks_2);
            plays_grid[i][j] = plays;
            if plays > 0 {
                win_rate_grid[i][j] = round_to(f64::from(wins) / f64::from(plays) * 100.0, 0) as i32;
            }
        }
    }

    GroupPairwise {
        groups: groups.to_vec(),
        plays_grid,
        win_rate_grid,
    }
}

fn count_results(matrix: &MatchMatrix, decks: &[DeckId], opponents: &[DeckId]) -> (u32, u32) {
    let mut plays = 0;
    let mut wins = 0;

    for &deck in decks {
        for &opponent in opponents {
            match matrix.get(deck, opponent) {
                UNPLAYED => {}
                WINNING_KEYS => {
                    plays += 1;
                    wins += 1;
                }
                _ => plays += 1,
            }
        }
    }

    (plays, wins)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::group_stats::GroupKind;
    use crate::analysis::test_support::{abc_catalog, abc_matches, deck, game};
    use crate::data::models::{DeckSet, House};

    const SET_A: Group = Group::Set(DeckSet::CallOfTheArchons);
    const SET_B: Group = Group::Set(DeckSet::AgeOfAscension);
    const SET_C: Group = Group::Set(DeckSet::WorldsCollide);

    fn abc_pairwise() -> GroupPairwise {
        let catalog = abc_catalog();
        let matrix = MatchMatrix::build(&catalog, &abc_matches());
        group_pairwise(&matrix, &catalog, &[SET_A, SET_B, SET_C])
    }

    #[test]
    fn singleton_groups_follow_deck_results() {
        let grid = abc_pairwise();
        assert_eq!(grid.plays(SET_A, SET_B), 1);
        assert_eq!(grid.plays(SET_A, SET_C), 1);
        assert_eq!(grid.plays(SET_B, SET_C), 0);
        assert_eq!(grid.plays(SET_A, SET_A), 0);

        assert_eq!(grid.win_rate(SET_A, SET_B), 100);
        assert_eq!(grid.win_rate(SET_B, SET_A), 0);
        assert_eq!(grid.win_rate(SET_A, SET_C), 0);
        assert_eq!(grid.win_rate(SET_C, SET_A), 100);
        assert_eq!(grid.win_rate(SET_B, SET_C), NO_WIN_RATE);
    }

    #[test]
    fn plays_grid_is_symmetric() {
        let catalog = abc_catalog();
        let matrix = MatchMatrix::build(&catalog, &abc_matches());
        for kind in [GroupKind::Set, GroupKind::House] {
            let grid = group_pairwise(&matrix, &catalog, &kind.groups());
            let n = grid.groups.len();
            for i in 0..n {
                for j in 0..n {
                    assert_eq!(grid.plays_grid[i][j], grid.plays_grid[j][i]);
                }
            }
        }
    }

    #[test]
    fn shared_house_counts_both_directions() {
        let catalog = abc_catalog();
        let matrix = MatchMatrix::build(&catalog, &abc_matches());
        let brobnar = Group::House(House::Brobnar);
        let grid = group_pairwise(&matrix, &catalog, &[brobnar]);

        // Two matches, each seen from both sides
        assert_eq!(grid.plays(brobnar, brobnar), 4);
        assert_eq!(grid.win_rate(brobnar, brobnar), 50);
    }

    #[test]
    fn win_rate_rounds_to_whole_percent() {
        let houses = [House::Ekwidon, House::Geistoid, House::Skyborn];
        let other = [House::Logos, House::Mars, House::Saurian];
        let catalog = DeckCatalog::new(vec![
            deck(1, DeckSet::WindsOfExchange, houses, 70.0),
            deck(2, DeckSet::GrimReminders, other, 70.0),
            deck(3, DeckSet::GrimReminders, other, 70.0),
            deck(4, DeckSet::GrimReminders, other, 70.0),
        ])
        .unwrap();
        let matches = [game(0, 1, 2, 3, 0), game(1, 1, 3, 2, 3), game(2, 1, 4, 1, 3)];
        let matrix = MatchMatrix::build(&catalog, &matches);
        let woe = Group::Set(DeckSet::WindsOfExchange);
        let gr = Group::Set(DeckSet::GrimReminders);
        let grid = group_pairwise(&matrix, &catalog, &[woe, gr]);

        assert_eq!(grid.plays(woe, gr), 3);
        assert_eq!(grid.win_rate(woe, gr), 33);
        assert_eq!(grid.win_rate(gr, woe), 67);
        assert_eq!(grid.win_rate(gr, gr), NO_WIN_RATE);
    }

    #[test]
    fn least_played_picks_first_minimum() {
        let grid = abc_pairwise();
        assert_eq!(grid.least_played(), Some((SET_A, SET_A, 0)));
    }
}

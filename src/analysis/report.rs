use super::deck_stats::{annotate_decks, AnnotatedDeck};
use super::group_pairwise::{group_pairwise, GroupPairwise};
use super::group_stats::{group_table, GroupKind, GroupStats};
use super::match_matrix::{MatchMatrix, MatrixTable};
use super::progress::{match_progress, matches_per_year, MatchProgress, YearCount};
use super::recommender::{MatchupRecommendation, MatchupRecommender};
use super::set_house::SetHouseTable;
use super::trend::{win_rate_vs_sas, SasTrend};
use crate::data::models::{DeckCatalog, Match};
use indicatif::ProgressBar;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupReport {
    pub kind: GroupKind,
    pub stats: Vec<GroupStats>,
    pub pairwise: GroupPairwise,
}

impl GroupReport {
    pub fn build(kind: GroupKind, decks: &[AnnotatedDeck], matrix: &MatchMatrix, catalog: &DeckCatalog) -> Self {
        GroupReport {
            kind,
            stats: group_table(kind, decks),
            pairwise: group_pairwise(matrix, catalog, &kind.groups()),
        }
    }
}

/// Every output table of one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub decks: Vec<AnnotatedDeck>,
    #[serde(skip)]
    pub matrix: MatchMatrix,
    pub match_matrix: MatrixTable,
    pub progress: Vec<MatchProgress>,
    pub matches_per_year: Vec<YearCount>,
    pub set_house: SetHouseTable,
    pub sets: GroupReport,
    pub houses: GroupReport,
    pub sas_trend: Option<SasTrend>,
    pub next_game: Option<MatchupRecommendation>,
}

impl Report {
    pub fn build(catalog: &DeckCatalog, matches: &[Match], pb: &ProgressBar) -> Self {
        let matrix = MatchMatrix::build(catalog, matches);
        let decks = annotate_decks(catalog, &matrix);

        let sets = GroupReport::build(GroupKind::Set, &decks, &matrix, catalog);
        let houses = GroupReport::build(GroupKind::House, &decks, &matrix, catalog);
        let next_game = MatchupRecommender::next_game(&decks, &matrix, &sets.pairwise);

        Report {
            sas_trend: win_rate_vs_sas(&decks),
            progress: match_progress(catalog, matches, pb),
            matches_per_year: matches_per_year(matches),
            set_house: SetHouseTable::build(catalog),
            match_matrix: matrix.to_table(),
            matrix,
            decks,
            sets,
            houses,
            next_game,
        }
    }

    pub fn group(&self, kind: GroupKind) -> &GroupReport {
        match kind {
            GroupKind::Set => &self.sets,
            GroupKind::House => &self.houses,
        }
    }
}

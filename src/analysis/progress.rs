use super::numeric::round_to;
use crate::data::models::{DeckCatalog, Match};
use chrono::{Datelike, NaiveDate};
use indicatif::ProgressBar;
use serde::Serialize;
use std::collections::BTreeMap;

/// How far the round robin had come when a match was played.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchProgress {
    pub sequence_index: u32,
    pub date: NaiveDate,
    pub cumulative_matches: u32,
    pub number_decks: u32,
    pub possible_matches: u32,
    pub perc_completion: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub matches: u32,
}

/// One entry per match, in log order. A deck counts towards the pool from
/// its entry date onwards.
pub fn match_progress(catalog: &DeckCatalog, matches: &[Match], pb: &ProgressBar) -> Vec<MatchProgress> {
    let mut entry_dates: Vec<NaiveDate> = catalog.decks().iter().map(|d| d.entry_date).collect();
    entry_dates.sort_unstable();

    let progress = matches
        .iter()
        .enumerate()
        .map(|(idx, m)| {
            let cumulative_matches = idx as u32 + 1;
            let number_decks = entry_dates.partition_point(|entry| *entry <= m.date) as u32;
            let possible_matches = number_decks * number_decks.saturating_sub(1) / 2;
            let perc_completion = if possible_matches == 0 {
                None
            } else {
                Some(round_to(
                    f64::from(cumulative_matches) / f64::from(possible_matches) * 100.0,
                    1,
                ))
            };
            pb.inc(1);

            MatchProgress {
                sequence_index: m.sequence_index,
                date: m.date,
                cumulative_matches,
                number_decks,
                possible_matches,
                perc_completion,
            }
        })
        .collect();

    pb.finish_and_clear();
    progress
}

pub fn matches_per_year(matches: &[Match]) -> Vec<YearCount> {
    let mut years: BTreeMap<i32, u32> = BTreeMap::new();
    for m in matches {
        *years.entry(m.date.year()).or_insert(0) += 1;
    }

    years
        .into_iter()
        .map(|(year, matches)| YearCount { year, matches })
        .collect()
}

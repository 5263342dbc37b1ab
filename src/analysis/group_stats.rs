use super::deck_stats::{AnnotatedDeck, DeckStats};
use super::numeric::{mean, population_std, round_to};
use crate::data::models::{Deck, DeckSet, House};
use crate::error::AppError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The ways decks can be partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Set,
    House,
}

impl GroupKind {
    /// Every group of this kind, in vocabulary order.
    pub fn groups(self) -> Vec<Group> {
        match self {
            GroupKind::Set => DeckSet::ALL.into_iter().map(Group::Set).collect(),
            GroupKind::House => House::ALL.into_iter().map(Group::House).collect(),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupKind::Set => f.write_str("set"),
            GroupKind::House => f.write_str("house"),
        }
    }
}

impl FromStr for GroupKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "set" => Ok(GroupKind::Set),
            "house" => Ok(GroupKind::House),
            _ => Err(AppError::InvalidGroupKind(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Group {
    Set(DeckSet),
    House(House),
}

impl Group {
    /// A deck belongs to a house group when the house fills exactly one of
    /// its three slots.
    pub fn contains(self, deck: &Deck) -> bool {
        match self {
            Group::Set(set) => deck.set == set,
            Group::House(house) => deck.house_slots(house) == 1,
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Group::Set(set) => set.fmt(f),
            Group::House(house) => house.fmt(f),
        }
    }
}

impl From<Group> for String {
    fn from(group: Group) -> Self {
        group.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStats {
    pub group: Group,
    pub decks: u32,
    #[serde(flatten)]
    pub totals: DeckStats,
    pub avg_deck_sas: Option<f64>,
    pub avg_deck_win_rate: Option<f64>,
    pub std_deck_win_rate: Option<f64>,
}

pub fn group_stats(group: Group, decks: &[AnnotatedDeck]) -> GroupStats {
    let members: Vec<&AnnotatedDeck> = decks.iter().filter(|d| group.contains(&d.deck)).collect();

    let plays = members.iter().map(|d| d.stats.plays).sum();
    let wins = members.iter().map(|d| d.stats.wins).sum();
    let keys_forged = members.iter().map(|d| d.stats.keys_forged).sum();
    let key_diff = members.iter().map(|d| d.stats.key_diff).sum();

    let sas: Vec<f64> = members.iter().map(|d| d.deck.sas).collect();
    // Decks that never played are left out, not counted as 0%
    let win_rates: Vec<f64> = members.iter().filter_map(|d| d.stats.win_rate).collect();

    GroupStats {
        group,
        decks: members.len() as u32,
        totals: DeckStats::from_totals(plays, wins, keys_forged, key_diff),
        avg_deck_sas: mean(&sas).map(|v| round_to(v, 1)),
        avg_deck_win_rate: mean(&win_rates).map(|v| round_to(v, 1)),
        std_deck_win_rate: population_std(&win_rates).map(|v| round_to(v, 1)),
    }
}

/// Stats for every group of `kind`, in vocabulary order.
pub fn group_table(kind: GroupKind, decks: &[AnnotatedDeck]) -> Vec<GroupStats> {
    kind.groups()
        .into_iter()
        .map(|group| group_stats(group, decks))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::deck_stats::annotate_decks;
    use crate::analysis::match_matrix::MatchMatrix;
    use crate::analysis::test_support::{abc_catalog, abc_matches, deck, game};
    use crate::data::models::DeckCatalog;

    fn annotated_abc() -> Vec<AnnotatedDeck> {
        let catalog = abc_catalog();
        let matrix = MatchMatrix::build(&catalog, &abc_matches());
        annotate_decks(&catalog, &matrix)
    }

    #[test]
    fn parses_group_kind() {
        assert_eq!("set".parse::<GroupKind>().unwrap(), GroupKind::Set);
        assert_eq!("House".parse::<GroupKind>().unwrap(), GroupKind::House);
        assert!(matches!(
            "rarity".parse::<GroupKind>(),
            Err(AppError::InvalidGroupKind(kind)) if kind == "rarity"
        ));
    }

    #[test]
    fn kinds_cover_whole_vocabulary() {
        assert_eq!(GroupKind::Set.groups().len(), 8);
        assert_eq!(GroupKind::House.groups().len(), 13);
        assert_eq!(GroupKind::Set.groups()[0], Group::Set(DeckSet::CallOfTheArchons));
        assert_eq!(GroupKind::House.groups()[12], Group::House(House::Skyborn));
    }

    #[test]
    fn house_membership_needs_the_house_in_a_slot() {
        let d = deck(1, DeckSet::MassMutation, [House::Dis, House::Logos, House::Saurian], 70.0);
        assert!(Group::House(House::Logos).contains(&d));
        assert!(!Group::House(House::Mars).contains(&d));
        assert!(Group::Set(DeckSet::MassMutation).contains(&d));
        assert!(!Group::Set(DeckSet::WorldsCollide).contains(&d));
    }

    #[test]
    fn group_totals_sum_member_decks() {
        let decks = annotated_abc();
        for kind in [GroupKind::Set, GroupKind::House] {
            for stats in group_table(kind, &decks) {
                let members: Vec<_> = decks.iter().filter(|d| stats.group.contains(&d.deck)).collect();
                assert_eq!(stats.decks as usize, members.len());
                assert_eq!(stats.totals.plays, members.iter().map(|d| d.stats.plays).sum::<u32>());
                assert_eq!(stats.totals.wins, members.iter().map(|d| d.stats.wins).sum::<u32>());
                assert_eq!(
                    stats.totals.keys_forged,
                    members.iter().map(|d| d.stats.keys_forged).sum::<u32>()
                );
                assert_eq!(stats.totals.key_diff, members.iter().map(|d| d.stats.key_diff).sum::<i64>());
            }
        }
    }

    #[test]
    fn shared_house_group_aggregates_rates() {
        // Every abc deck carries brobnar
        let stats = group_stats(Group::House(House::Brobnar), &annotated_abc());
        assert_eq!(stats.decks, 3);
        assert_eq!(stats.totals.plays, 4);
        assert_eq!(stats.totals.wins, 2);
        assert_eq!(stats.totals.keys_forged, 9);
        assert_eq!(stats.totals.key_diff, 0);
        assert_eq!(stats.totals.win_rate, Some(50.0));
        assert_eq!(stats.totals.avg_keys_forged, Some(2.2));
        assert_eq!(stats.totals.avg_key_diff, Some(0.0));
        assert_eq!(stats.avg_deck_sas, Some(65.0));
        assert_eq!(stats.avg_deck_win_rate, Some(50.0));
        assert_eq!(stats.std_deck_win_rate, Some(40.8));
    }

    #[test]
    fn empty_group_has_no_rates() {
        let stats = group_stats(Group::Set(DeckSet::AEmberSkies), &annotated_abc());
        assert_eq!(stats.decks, 0);
        assert_eq!(stats.totals.plays, 0);
        assert_eq!(stats.totals.win_rate, None);
        assert_eq!(stats.avg_deck_sas, None);
        assert_eq!(stats.avg_deck_win_rate, None);
        assert_eq!(stats.std_deck_win_rate, None);
    }

    #[test]
    fn unplayed_decks_are_left_out_of_deck_win_rate_spread() {
        let houses = [House::Sanctum, House::Shadows, House::Untamed];
        let catalog = DeckCatalog::new(vec![
            deck(1, DeckSet::DarkTidings, houses, 60.0),
            deck(2, DeckSet::DarkTidings, houses, 70.0),
            deck(3, DeckSet::GrimReminders, [House::Mars, House::Dis, House::Logos], 80.0),
        ])
        .unwrap();
        let matrix = MatchMatrix::build(&catalog, &[game(0, 1, 3, 3, 2)]);
        let decks = annotate_decks(&catalog, &matrix);

        let stats = group_stats(Group::Set(DeckSet::DarkTidings), &decks);
        assert_eq!(stats.decks, 2);
        assert_eq!(stats.totals.plays, 1);
        assert_eq!(stats.avg_deck_sas, Some(65.0));
        assert_eq!(stats.avg_deck_win_rate, Some(100.0));
        assert_eq!(stats.std_deck_win_rate, Some(0.0));
    }

    #[test]
    fn group_serializes_by_name() {
        let json = serde_json::to_value(group_stats(Group::House(House::StarAlliance), &annotated_abc())).unwrap();
        assert_eq!(json["group"], "star alliance");
        assert_eq!(json["decks"], 0);
        assert!(json["win_rate"].is_null());
    }
}

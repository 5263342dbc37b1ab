use crate::error::AppError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub type DeckId = u32;

// Expansion sets in release order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DeckSet {
    CallOfTheArchons,
    AgeOfAscension,
    WorldsCollide,
    MassMutation,
    DarkTidings,
    WindsOfExchange,
    GrimReminders,
    AEmberSkies,
}

impl DeckSet {
    pub const ALL: [DeckSet; 8] = [
        DeckSet::CallOfTheArchons,
        DeckSet::AgeOfAscension,
        DeckSet::WorldsCollide,
        DeckSet::MassMutation,
        DeckSet::DarkTidings,
        DeckSet::WindsOfExchange,
        DeckSet::GrimReminders,
        DeckSet::AEmberSkies,
    ];

    pub fn code(self) -> &'static str {
        match self {
            DeckSet::CallOfTheArchons => "CotA",
            DeckSet::AgeOfAscension => "AoA",
            DeckSet::WorldsCollide => "WC",
            DeckSet::MassMutation => "MM",
            DeckSet::DarkTidings => "DT",
            DeckSet::WindsOfExchange => "WoE",
            DeckSet::GrimReminders => "GR",
            DeckSet::AEmberSkies => "AS",
        }
    }
}

impl fmt::Display for DeckSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DeckSet {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        DeckSet::ALL
            .into_iter()
            .find(|set| set.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidSet(s.to_string()))
    }
}

impl TryFrom<String> for DeckSet {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DeckSet> for String {
    fn from(set: DeckSet) -> Self {
        set.code().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum House {
    Brobnar,
    Dis,
    Logos,
    Mars,
    Sanctum,
    Shadows,
    Untamed,
    StarAlliance,
    Saurian,
    Unfathomable,
    Ekwidon,
    Geistoid,
    Skyborn,
}

impl House {
    pub const ALL: [House; 13] = [
        House::Brobnar,
        House::Dis,
        House::Logos,
        House::Mars,
        House::Sanctum,
        House::Shadows,
        House::Untamed,
        House::StarAlliance,
        House::Saurian,
        House::Unfathomable,
        House::Ekwidon,
        House::Geistoid,
        House::Skyborn,
    ];

    pub fn name(self) -> &'static str {
        match self {
            House::Brobnar => "brobnar",
            House::Dis => "dis",
            House::Logos => "logos",
            House::Mars => "mars",
            House::Sanctum => "sanctum",
            House::Shadows => "shadows",
            House::Untamed => "untamed",
            House::StarAlliance => "star alliance",
            House::Saurian => "saurian",
            House::Unfathomable => "unfathomable",
            House::Ekwidon => "ekwidon",
            House::Geistoid => "geistoid",
            House::Skyborn => "skyborn",
        }
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for House {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        House::ALL
            .into_iter()
            .find(|house| house.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| AppError::InvalidHouse(s.to_string()))
    }
}

impl TryFrom<String> for House {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<House> for String {
    fn from(house: House) -> Self {
        house.name().to_string()
    }
}

// Row of the deck table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub set: DeckSet,
    pub house1: House,
    pub house2: House,
    pub house3: House,
    pub entry_date: NaiveDate,
    #[serde(rename = "SAS")]
    pub sas: f64,
}

impl Deck {
    pub fn houses(&self) -> [House; 3] {
        [self.house1, self.house2, self.house3]
    }

    /// Number of house slots holding `house`. Always 0 or 1 for a
    /// well-formed deck.
    pub fn house_slots(&self, house: House) -> usize {
        self.houses().iter().filter(|h| **h == house).count()
    }
}

// Row of the match table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub sequence_index: u32,
    pub deck1_id: DeckId,
    pub deck2_id: DeckId,
    pub deck1_keys_forged: u8,
    pub deck2_keys_forged: u8,
    pub date: NaiveDate,
}

/// Decks in table order, with an id → position lookup.
#[derive(Debug, Clone)]
pub struct DeckCatalog {
    decks: Vec<Deck>,
    index: HashMap<DeckId, usize>,
}

impl DeckCatalog {
    pub fn new(decks: Vec<Deck>) -> Result<Self, AppError> {
        let mut index = HashMap::with_capacity(decks.len());
        for (position, deck) in decks.iter().enumerate() {
            if index.insert(deck.id, position).is_some() {
                return Err(AppError::DuplicateDeck(deck.id));
            }
        }

        Ok(DeckCatalog { decks, index })
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn ids(&self) -> impl Iterator<Item = DeckId> + '_ {
        self.decks.iter().map(|d| d.id)
    }

    pub fn len(&self) -> usize {
        self.decks.len()
    }

    pub fn contains(&self, id: DeckId) -> bool {
        self.index.contains_key(&id)
    }

    /// Panics if `id` is not in the catalog.
    #[allow(dead_code)]
    pub fn get(&self, id: DeckId) -> &Deck {
        match self.index.get(&id) {
            Some(&position) => &self.decks[position],
            None => panic!("deck {} is not in the catalog", id),
        }
    }
}

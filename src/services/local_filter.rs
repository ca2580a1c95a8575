//! Client-side filtering over cards already present on the page.

use crate::domain::filter::FilterChange;
use crate::domain::listing::ListingRecord;
use crate::domain::types::CountryFilter;

/// Searchable attributes of one rendered card (`data-country`, `data-name`,
/// `data-town`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardSummary {
    pub country: String,
    pub name: String,
    pub town: String,
}

impl From<&ListingRecord> for CardSummary {
    fn from(record: &ListingRecord) -> Self {
        Self {
            country: record.country.clone().unwrap_or_default(),
            name: record.name.clone().unwrap_or_default(),
            town: record.town.clone().unwrap_or_default(),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Country must match exactly (ignoring case); the query must be a substring
/// of the name or the town.
pub fn card_matches(card: &CardSummary, change: &FilterChange) -> bool {
    let country = CountryFilter::new(&change.country);
    if !country.matches(&card.country) {
        return false;
    }

    let query = normalize(&change.search);
    query.is_empty()
        || normalize(&card.name).contains(&query)
        || normalize(&card.town).contains(&query)
}

/// Cards of the page with their current visibility.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LocalListing {
    cards: Vec<CardSummary>,
    visible: Vec<bool>,
    empty_state: bool,
}

impl LocalListing {
    pub fn new(cards: Vec<CardSummary>) -> Self {
        let visible = vec![true; cards.len()];
        let empty_state = cards.is_empty();
        Self {
            cards,
            visible,
            empty_state,
        }
    }

    /// Recomputes visibility and returns the number of visible cards.
    pub fn apply(&mut self, change: &FilterChange) -> usize {
        self.visible = self
            .cards
            .iter()
            .map(|card| card_matches(card, change))
            .collect();
        let count = self.visible.iter().filter(|v| **v).count();
        self.empty_state = count == 0;
        count
    }

    pub fn cards(&self) -> &[CardSummary] {
        &self.cards
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn show_empty_state(&self) -> bool {
        self.empty_state
    }
}

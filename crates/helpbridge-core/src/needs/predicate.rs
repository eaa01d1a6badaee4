//! Filter Predicates
//!
//! A record is visible when the search, category, urgency and location
//! predicates all hold.

use super::model::NeedRecord;
use super::state::{Facet, FilterState};

/// Case-insensitive substring match on name, description and category.
/// An empty term matches everything.
pub fn matches_search(record: &NeedRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    [&record.name, &record.description, &record.category]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Exact membership test; an empty selection matches everything
pub fn matches_facet(record: &NeedRecord, state: &FilterState, facet: Facet) -> bool {
    let selected = state.selected(facet);
    selected.is_empty() || selected.contains(facet.value_of(record))
}

pub fn matches_category(record: &NeedRecord, state: &FilterState) -> bool {
    matches_facet(record, state, Facet::Category)
}

pub fn matches_urgency(record: &NeedRecord, state: &FilterState) -> bool {
    matches_facet(record, state, Facet::Urgency)
}

/// Compares the full "City, Region" string, not the displayed city
pub fn matches_location(record: &NeedRecord, state: &FilterState) -> bool {
    matches_facet(record, state, Facet::Location)
}

pub fn matches(record: &NeedRecord, state: &FilterState) -> bool {
    matches_search(record, &state.search_term)
        && matches_category(record, state)
        && matches_urgency(record, state)
        && matches_location(record, state)
}

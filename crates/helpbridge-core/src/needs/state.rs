//! Filter State
//!
//! Search term, facet selections and sort option for the need listing.
//! Mutated only through the operations below; the result set is derived
//! from it on every change.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::model::NeedRecord;

/// Sort criterion for the visible needs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortOption {
    #[default]
    Urgency,
    Category,
    Location,
    /// Unrecognized value, leaves the filtered order untouched
    Other(String),
}

impl SortOption {
    /// Options offered by the sort selector
    pub const CHOICES: &'static [(SortOption, &'static str)] = &[
        (SortOption::Urgency, "Urgency"),
        (SortOption::Category, "Category"),
        (SortOption::Location, "Location"),
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SortOption::Urgency => "urgency",
            SortOption::Category => "category",
            SortOption::Location => "location",
            SortOption::Other(s) => s,
        }
    }
}

impl From<&str> for SortOption {
    fn from(s: &str) -> Self {
        match s {
            "urgency" => SortOption::Urgency,
            "category" => SortOption::Category,
            "location" => SortOption::Location,
            other => SortOption::Other(other.to_string()),
        }
    }
}

impl From<String> for SortOption {
    fn from(s: String) -> Self {
        SortOption::from(s.as_str())
    }
}

impl From<SortOption> for String {
    fn from(o: SortOption) -> Self {
        o.as_str().to_string()
    }
}

/// A filterable dimension of a need record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Category,
    Urgency,
    Location,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Category, Facet::Urgency, Facet::Location];

    /// The record's value for this facet
    pub fn value_of<'a>(&self, record: &'a NeedRecord) -> &'a str {
        match self {
            Facet::Category => &record.category,
            Facet::Urgency => record.urgency.as_str(),
            Facet::Location => &record.location,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Facet::Category => "Category",
            Facet::Urgency => "Urgency",
            Facet::Location => "Location",
        }
    }
}

/// One removable chip in the active-filter bar
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FilterChip {
    Search(String),
    Selected(Facet, String),
}

impl fmt::Display for FilterChip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterChip::Search(term) => write!(f, "Search: {}", term),
            FilterChip::Selected(Facet::Location, value) => {
                write!(f, "{}: {}", Facet::Location.label(), super::facets::city_label(value))
            }
            FilterChip::Selected(facet, value) => write!(f, "{}: {}", facet.label(), value),
        }
    }
}

/// Current filter settings of the need listing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub search_term: String,
    pub sort_option: SortOption,
    pub selected_categories: BTreeSet<String>,
    pub selected_urgencies: BTreeSet<String>,
    pub selected_locations: BTreeSet<String>,
    /// Pagination cursor; stored but not applied to the result set
    pub current_page: usize,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the search term verbatim
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_sort_option(&mut self, option: impl Into<SortOption>) {
        self.sort_option = option.into();
    }

    pub fn set_current_page(&mut self, page: usize) {
        self.current_page = page;
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Category => &self.selected_categories,
            Facet::Urgency => &self.selected_urgencies,
            Facet::Location => &self.selected_locations,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Category => &mut self.selected_categories,
            Facet::Urgency => &mut self.selected_urgencies,
            Facet::Location => &mut self.selected_locations,
        }
    }

    pub fn is_selected(&self, facet: Facet, value: &str) -> bool {
        self.selected(facet).contains(value)
    }

    /// Add `value` to the facet selection, or remove it if already present
    pub fn toggle(&mut self, facet: Facet, value: &str) {
        let set = self.selected_mut(facet);
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }

    pub fn toggle_category(&mut self, value: &str) {
        self.toggle(Facet::Category, value);
    }

    pub fn toggle_urgency(&mut self, value: &str) {
        self.toggle(Facet::Urgency, value);
    }

    pub fn toggle_location(&mut self, value: &str) {
        self.toggle(Facet::Location, value);
    }

    /// Reset search and every facet selection. Sort option is kept.
    pub fn clear_filters(&mut self) {
        self.search_term.clear();
        for facet in Facet::ALL {
            self.selected_mut(facet).clear();
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || Facet::ALL.iter().any(|f| !self.selected(*f).is_empty())
    }

    /// Chips for the active-filter bar: search first, then each selected value per facet
    pub fn active_chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        if !self.search_term.is_empty() {
            chips.push(FilterChip::Search(self.search_term.clone()));
        }
        for facet in Facet::ALL {
            chips.extend(
                self.selected(facet)
                    .iter()
                    .map(|value| FilterChip::Selected(facet, value.clone())),
            );
        }
        chips
    }

    /// Remove a chip through the regular mutation operations
    pub fn remove_chip(&mut self, chip: &FilterChip) {
        match chip {
            FilterChip::Search(_) => self.set_search_term(""),
            FilterChip::Selected(facet, value) => {
                if self.is_selected(*facet, value) {
                    self.toggle(*facet, value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = FilterState::new();
        assert_eq!(state.sort_option, SortOption::Urgency);
        assert!(state.search_term.is_empty());
        assert!(!state.has_active_filters());
        assert_eq!(state.current_page, 0);
    }

    #[test]
    fn test_toggle_twice_restores_membership() {
        let mut state = FilterState::new();
        state.toggle_category("Health");
        let before = state.clone();

        for facet in Facet::ALL {
            state.toggle(facet, "Education");
            state.toggle(facet, "Education");
        }
        assert_eq!(state, before);

        state.toggle_category("Health");
        assert!(state.selected_categories.is_empty());
    }

    #[test]
    fn test_toggles_are_independent_per_facet() {
        let mut state = FilterState::new();
        state.toggle_urgency("Critical");
        state.toggle_location("Delhi, NCR");

        assert!(state.is_selected(Facet::Urgency, "Critical"));
        assert!(state.is_selected(Facet::Location, "Delhi, NCR"));
        assert!(!state.is_selected(Facet::Category, "Critical"));
    }

    #[test]
    fn test_clear_filters_keeps_sort_option() {
        let mut state = FilterState::new();
        state.set_search_term("x");
        state.toggle_category("Education");
        state.toggle_category("Health");
        state.toggle_urgency("High");
        state.toggle_location("Kerala, India");
        state.set_sort_option("location");

        state.clear_filters();

        assert_eq!(state.search_term, "");
        assert!(state.selected_categories.is_empty());
        assert!(state.selected_urgencies.is_empty());
        assert!(state.selected_locations.is_empty());
        assert!(!state.has_active_filters());
        assert_eq!(state.sort_option, SortOption::Location);
    }

    #[test]
    fn test_search_term_stored_verbatim() {
        let mut state = FilterState::new();
        state.set_search_term("  Flood ");
        assert_eq!(state.search_term, "  Flood ");
        assert!(state.has_active_filters());
    }

    #[test]
    fn test_unknown_sort_option_is_kept() {
        let mut state = FilterState::new();
        state.set_sort_option("popularity");
        assert_eq!(state.sort_option, SortOption::Other("popularity".to_string()));
        assert_eq!(state.sort_option.as_str(), "popularity");
    }

    #[test]
    fn test_active_chips_order() {
        let mut state = FilterState::new();
        state.toggle_location("Delhi, NCR");
        state.toggle_category("Health");
        state.toggle_category("Education");
        state.set_search_term("food");

        let chips = state.active_chips();
        assert_eq!(
            chips,
            vec![
                FilterChip::Search("food".to_string()),
                FilterChip::Selected(Facet::Category, "Education".to_string()),
                FilterChip::Selected(Facet::Category, "Health".to_string()),
                FilterChip::Selected(Facet::Location, "Delhi, NCR".to_string()),
            ]
        );
        assert_eq!(chips[3].to_string(), "Location: Delhi");
    }

    #[test]
    fn test_remove_chip_routes_through_toggle() {
        let mut state = FilterState::new();
        state.set_search_term("water");
        state.toggle_urgency("Critical");

        for chip in state.active_chips() {
            state.remove_chip(&chip);
        }
        assert!(!state.has_active_filters());

        // Removing a stale chip must not re-add the value
        state.remove_chip(&FilterChip::Selected(Facet::Urgency, "Critical".to_string()));
        assert!(state.selected_urgencies.is_empty());
    }

    #[test]
    fn test_current_page_is_stored() {
        let mut state = FilterState::new();
        state.set_current_page(3);
        state.clear_filters();
        assert_eq!(state.current_page, 3);
    }
}

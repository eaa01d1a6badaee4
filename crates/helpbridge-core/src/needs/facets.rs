//! Facet Extraction
//!
//! Selectable filter values derived from the catalog.

use std::collections::HashSet;

use super::model::NeedRecord;
use super::state::Facet;

/// Distinct values per facet, in first-occurrence order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FacetOptions {
    pub categories: Vec<String>,
    pub urgencies: Vec<String>,
    pub locations: Vec<String>,
}

impl FacetOptions {
    pub fn values(&self, facet: Facet) -> &[String] {
        match facet {
            Facet::Category => &self.categories,
            Facet::Urgency => &self.urgencies,
            Facet::Location => &self.locations,
        }
    }
}

fn distinct(catalog: &[NeedRecord], facet: Facet) -> Vec<String> {
    let mut seen = HashSet::new();
    catalog
        .iter()
        .map(|record| facet.value_of(record))
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}

/// Derive the category, urgency and location option lists
pub fn extract_facets(catalog: &[NeedRecord]) -> FacetOptions {
    FacetOptions {
        categories: distinct(catalog, Facet::Category),
        urgencies: distinct(catalog, Facet::Urgency),
        locations: distinct(catalog, Facet::Location),
    }
}

/// Display label for a location: the text before the first comma.
/// Filtering still uses the full string.
pub fn city_label(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

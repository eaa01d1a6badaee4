//! Need Listing Engine
//!
//! Filtering, sorting and facet extraction over the need catalog.

mod facets;
mod model;
mod predicate;
mod sort;
mod state;

pub use facets::{city_label, extract_facets, FacetOptions};
pub use model::{NeedId, NeedRecord, Urgency};
pub use predicate::{
    matches, matches_category, matches_facet, matches_location, matches_search, matches_urgency,
};
pub use sort::{locale_compare, sort_needs};
pub use state::{Facet, FilterChip, FilterState, SortOption};

/// Filter the catalog with `state`, then order by its sort option
pub fn visible_needs(catalog: &[NeedRecord], state: &FilterState) -> Vec<NeedRecord> {
    let filtered: Vec<NeedRecord> = catalog
        .iter()
        .filter(|record| matches(record, state))
        .cloned()
        .collect();
    let sorted = sort_needs(&filtered, &state.sort_option);
    log::debug!(
        "[Needs] {} of {} visible (search={:?}, sort={})",
        sorted.len(),
        catalog.len(),
        state.search_term,
        state.sort_option.as_str()
    );
    sorted
}

//! Need Browser Page
//!
//! Search, facet filters and sort over the need catalog. The visible list
//! is a memo over the filter state, so every edit recomputes it before the
//! next paint.

use helpbridge_core::catalog;
use helpbridge_core::needs::{extract_facets, visible_needs, FilterState};
use leptos::prelude::*;

use crate::components::{ActiveFilters, FilterSidebar, NeedCard};

#[component]
pub fn NeedBrowser() -> impl IntoView {
    let needs = catalog::sample_needs();
    let facets = extract_facets(needs);

    let filters = RwSignal::new(FilterState::new());
    let visible = Memo::new(move |_| filters.with(|state| visible_needs(needs, state)));

    view! {
        <div class="needs-page">
            <FilterSidebar filters=filters facets=facets />

            <section class="needs-results">
                <ActiveFilters filters=filters />

                <p class="result-count">
                    {move || format!("Showing {} of {} needs", visible.with(Vec::len), needs.len())}
                </p>

                {move || if visible.with(Vec::is_empty) {
                    view! {
                        <div class="no-results">
                            <p>"No needs match your search."</p>
                            <button
                                class="clear-btn"
                                on:click=move |_| filters.update(FilterState::clear_filters)
                            >
                                "Clear all filters"
                            </button>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="need-grid">
                            <For
                                each=move || visible.get()
                                key=|need| need.id.clone()
                                children=move |need| view! { <NeedCard need=need /> }
                            />
                        </div>
                    }.into_any()
                }}
            </section>
        </div>
    }
}

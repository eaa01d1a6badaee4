//! Filter Sidebar Component
//!
//! Search box, sort selector and facet toggles bound to a `FilterState`.

use helpbridge_core::needs::{city_label, Facet, FacetOptions, FilterState, SortOption};
use leptos::prelude::*;

/// Toggle buttons for one facet
#[component]
fn FacetGroup(facet: Facet, values: Vec<String>, filters: RwSignal<FilterState>) -> impl IntoView {
    view! {
        <div class="facet-group">
            <h4 class="facet-title">{facet.label()}</h4>
            <div class="facet-options">
                {values.into_iter().map(|value| {
                    // Locations show the city only; the full value is what gets filtered
                    let label = match facet {
                        Facet::Location => city_label(&value).to_string(),
                        _ => value.clone(),
                    };
                    let title = value.clone();
                    let value_for_check = value.clone();
                    let is_selected = move || filters.with(|s| s.is_selected(facet, &value_for_check));
                    view! {
                        <button
                            type="button"
                            title=title
                            class=move || if is_selected() { "facet-btn active" } else { "facet-btn" }
                            on:click=move |_| filters.update(|s| s.toggle(facet, &value))
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}

/// Sidebar shared by the browse page
#[component]
pub fn FilterSidebar(filters: RwSignal<FilterState>, facets: FacetOptions) -> impl IntoView {
    let has_active = move || filters.with(FilterState::has_active_filters);

    view! {
        <aside class="filter-sidebar">
            <div class="filter-sidebar-header">
                <span>"Filters"</span>
                <Show when=has_active>
                    <button
                        class="clear-btn"
                        on:click=move |_| filters.update(FilterState::clear_filters)
                    >
                        "Clear all"
                    </button>
                </Show>
            </div>

            <input
                type="search"
                class="search-input"
                placeholder="Search needs..."
                prop:value=move || filters.with(|s| s.search_term.clone())
                on:input=move |ev| {
                    let term = event_target_value(&ev);
                    filters.update(|s| s.set_search_term(term));
                }
            />

            <label class="sort-label">
                "Sort by "
                <select
                    class="sort-select"
                    prop:value=move || filters.with(|s| s.sort_option.as_str().to_string())
                    on:change=move |ev| {
                        let option = event_target_value(&ev);
                        filters.update(|s| s.set_sort_option(option));
                    }
                >
                    {SortOption::CHOICES.iter().map(|(option, label)| {
                        view! { <option value=option.as_str().to_string()>{*label}</option> }
                    }).collect_view()}
                </select>
            </label>

            {Facet::ALL.into_iter().map(|facet| {
                let values = facets.values(facet).to_vec();
                view! { <FacetGroup facet=facet values=values filters=filters /> }
            }).collect_view()}
        </aside>
    }
}

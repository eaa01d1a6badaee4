//! Active Filter Chips
//!
//! One chip per active constraint. Removing a chip goes through the same
//! state operations as the sidebar controls.

use helpbridge_core::needs::FilterState;
use leptos::prelude::*;

#[component]
pub fn ActiveFilters(filters: RwSignal<FilterState>) -> impl IntoView {
    let chips = move || filters.with(FilterState::active_chips);

    view! {
        <Show when=move || !chips().is_empty()>
            <div class="active-filters">
                <For
                    each=chips
                    key=|chip| chip.clone()
                    children=move |chip| {
                        let text = chip.to_string();
                        view! {
                            <span class="filter-chip">
                                {text}
                                <button
                                    class="chip-remove"
                                    aria-label="Remove filter"
                                    on:click=move |_| filters.update(|s| s.remove_chip(&chip))
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </Show>
    }
}

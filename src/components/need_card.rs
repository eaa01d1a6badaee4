//! Need Card Component
//!
//! Summary card for one need in the result grid.

use helpbridge_core::needs::{city_label, NeedRecord, Urgency};
use leptos::prelude::*;

use crate::context::{use_app_context, Page};

/// CSS class for an urgency badge; unknown levels get the default style
pub fn urgency_class(urgency: &Urgency) -> &'static str {
    match urgency {
        Urgency::Critical => "urgency-badge urgency-critical",
        Urgency::High => "urgency-badge urgency-high",
        Urgency::Medium => "urgency-badge urgency-medium",
        Urgency::Low => "urgency-badge urgency-low",
        Urgency::Other(_) => "urgency-badge urgency-default",
    }
}

#[component]
pub fn NeedCard(need: NeedRecord) -> impl IntoView {
    let ctx = use_app_context();
    let id = need.id.clone();
    let funded = need.funded.min(100);

    view! {
        <article class="need-card">
            <header class="need-card-header">
                <h3 class="need-name">{need.name.clone()}</h3>
                <span class=urgency_class(&need.urgency)>{need.urgency.to_string()}</span>
            </header>

            <div class="need-meta">
                <span class="need-category">{need.category.clone()}</span>
                <span class="need-location" title=need.location.clone()>
                    {city_label(&need.location).to_string()}
                </span>
            </div>

            <p class="need-description">{need.description.clone()}</p>

            <div class="funding-bar">
                <div class="funding-fill" style=format!("width: {}%;", funded)></div>
            </div>
            <div class="need-stats">
                <span>{format!("{}% funded", funded)}</span>
                <span>{format!("{} volunteers", need.volunteers)}</span>
            </div>

            <footer class="need-card-footer">
                <span class="need-contact">{need.contact.clone()}</span>
                <button
                    class="details-btn"
                    on:click=move |_| ctx.navigate(Page::NeedDetail(id.clone()))
                >
                    "View details"
                </button>
            </footer>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_class_fallback() {
        assert_eq!(urgency_class(&Urgency::Critical), "urgency-badge urgency-critical");
        assert_eq!(urgency_class(&Urgency::Low), "urgency-badge urgency-low");
        assert_eq!(
            urgency_class(&Urgency::from("Ongoing")),
            "urgency-badge urgency-default"
        );
    }
}

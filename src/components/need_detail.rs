//! Need Detail Page
//!
//! Full listing fetched from the API by id.

use helpbridge_core::needs::NeedId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::need_card::urgency_class;
use crate::context::{use_app_context, Page};
use crate::models::NeedDetail;

#[component]
pub fn NeedDetailView(id: NeedId) -> impl IntoView {
    let ctx = use_app_context();
    let (detail, set_detail) = signal::<Option<NeedDetail>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = id.clone();
        let config = ctx.config();
        spawn_local(async move {
            match api::fetch_need_detail(&config, &id).await {
                Ok(loaded) => {
                    log::info!("[NeedDetail] loaded need {}", id);
                    set_detail.set(Some(loaded));
                }
                Err(e) => {
                    log::error!("[NeedDetail] failed to load need {}: {}", id, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="need-detail">
            <button class="back-btn" on:click=move |_| ctx.navigate(Page::Needs)>"← Back to needs"</button>

            <Show when=move || loading.get()>
                <div class="loading">"Loading..."</div>
            </Show>

            {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

            {move || detail.get().map(|d| view! {
                <article class="need-detail-card">
                    <header>
                        <h2>{d.title.clone()}</h2>
                        <span class=urgency_class(&d.urgency)>{d.urgency.to_string()}</span>
                    </header>
                    <dl class="need-detail-fields">
                        <dt>"Category"</dt><dd>{d.category.clone()}</dd>
                        <dt>"Location"</dt><dd>{d.location.clone()}</dd>
                        <dt>"Funding raised"</dt><dd>{format!("₹{:.0}", d.funding_raised)}</dd>
                        <dt>"Volunteers assigned"</dt><dd>{d.volunteers_assigned}</dd>
                        <dt>"Contact"</dt><dd>{d.contact.clone()}</dd>
                    </dl>
                    <p class="need-description">{d.description.clone()}</p>
                </article>
            })}
        </div>
    }
}

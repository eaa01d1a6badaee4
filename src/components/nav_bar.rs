//! Navigation Bar Component

use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{store_sign_out, store_unread_count, use_app_store, AppStateStoreFields};

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let signed_in = move || store.session().with(Option::is_some);

    let nav_button = move |label: &'static str, target: Page| {
        let target_for_class = target.clone();
        view! {
            <button
                class=move || if ctx.page.get() == target_for_class { "nav-btn active" } else { "nav-btn" }
                on:click=move |_| ctx.navigate(target.clone())
            >
                {label}
            </button>
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="brand">"HelpBridge"</span>
            {nav_button("Needs", Page::Needs)}
            <span class="nav-notifications">
                {nav_button("Notifications", Page::Notifications)}
                {move || {
                    let unread = store_unread_count(&store);
                    (unread > 0).then(|| view! { <span class="badge">{unread}</span> })
                }}
            </span>
            <Show
                when=signed_in
                fallback=move || view! {
                    {nav_button("Sign in", Page::Login)}
                    {nav_button("Register", Page::Register)}
                }
            >
                {nav_button("Profile", Page::Profile)}
                <button class="nav-btn" on:click=move |_| {
                    store_sign_out(&store);
                    ctx.navigate(Page::Needs);
                }>
                    "Sign out"
                </button>
            </Show>
        </nav>
    }
}

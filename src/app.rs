//! HelpBridge Frontend App
//!
//! Main application component: navigation bar plus the current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    LoginForm, NavBar, NeedBrowser, NeedDetailView, NotificationCenter, ProfilePage, RegistrationWizard,
};
use crate::config::AppConfig;
use crate::context::{AppContext, Page};
use crate::session::Session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (page, set_page) = signal(Page::Needs);

    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new((page, set_page), config));

    // Restore a saved session on mount
    Effect::new(move |_| {
        if let Some(saved) = Session::browser().restore() {
            log::info!("[App] restored session for {}", saved.user.email);
            *store.session().write() = Some(saved);
        }
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match page.get() {
                    Page::Needs => view! { <NeedBrowser /> }.into_any(),
                    Page::NeedDetail(id) => view! { <NeedDetailView id=id /> }.into_any(),
                    Page::Notifications => view! { <NotificationCenter /> }.into_any(),
                    Page::Profile => view! { <ProfilePage /> }.into_any(),
                    Page::Login => view! { <LoginForm /> }.into_any(),
                    Page::Register => view! { <RegistrationWizard /> }.into_any(),
                }}
            </main>
        </div>
    }
}

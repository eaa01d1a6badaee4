//! Notification Center
//!
//! Notification feed with tab filters and read tracking.

use chrono::Utc;
use helpbridge_core::notifications::{filter_notifications, relative_time, NotificationFilter, NotificationKind};
use leptos::prelude::*;

use crate::store::{store_mark_all_read, store_mark_read, store_unread_count, use_app_store, AppStateStoreFields};

fn tabs() -> Vec<(NotificationFilter, String)> {
    let mut tabs = vec![
        (NotificationFilter::All, "All".to_string()),
        (NotificationFilter::Unread, "Unread".to_string()),
    ];
    tabs.extend(
        NotificationKind::TABS
            .iter()
            .map(|kind| (NotificationFilter::Kind(kind.clone()), kind.label().to_string())),
    );
    tabs
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(NotificationFilter::All);

    let shown = Memo::new(move |_| {
        let current = filter.get();
        filter_notifications(&store.notifications().read(), &current)
    });

    view! {
        <div class="notification-center">
            <div class="notification-header">
                <h2>"Notifications"</h2>
                <span class="unread-count">{move || format!("{} unread", store_unread_count(&store))}</span>
                <button class="mark-all-btn" on:click=move |_| store_mark_all_read(&store)>
                    "Mark all as read"
                </button>
            </div>

            <div class="notification-tabs">
                {tabs().into_iter().map(|(tab, label)| {
                    let tab_for_class = tab.clone();
                    view! {
                        <button
                            class=move || if filter.get() == tab_for_class { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| filter.set(tab.clone())
                        >
                            {label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || if shown.with(Vec::is_empty) {
                view! { <div class="no-results">"No notifications here."</div> }.into_any()
            } else {
                view! {
                    <ul class="notification-list">
                        <For
                            each=move || shown.get()
                            key=|n| (n.id, n.read)
                            children=move |n| {
                                let id = n.id;
                                let age = relative_time(n.created_at, Utc::now());
                                view! {
                                    <li
                                        class=if n.read { "notification read" } else { "notification unread" }
                                        on:click=move |_| store_mark_read(&store, id)
                                    >
                                        <span class=format!("notification-kind kind-{}", n.kind.as_str())>
                                            {n.kind.label().to_string()}
                                        </span>
                                        <div class="notification-body">
                                            <strong>{n.title.clone()}</strong>
                                            <p>{n.message.clone()}</p>
                                        </div>
                                        <time class="notification-age">{age}</time>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }.into_any()
            }}
        </div>
    }
}

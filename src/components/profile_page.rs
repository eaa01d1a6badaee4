//! Profile Page
//!
//! Role-dependent profile view for the signed-in user.

use helpbridge_core::account::{ProfileSection, ProfileView};
use helpbridge_core::User;
use leptos::prelude::*;

use crate::context::{use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

fn section_body(section: ProfileSection, user: &User) -> String {
    match section {
        ProfileSection::Contact => user.email.clone(),
        ProfileSection::Organization => format!("{} (registered NGO)", user.name),
        _ => "Nothing here yet.".to_string(),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    move || match store.session().get() {
        None => view! {
            <div class="profile-signed-out">
                <p>"Sign in to see your profile."</p>
                <button on:click=move |_| ctx.navigate(Page::Login)>"Sign in"</button>
            </div>
        }.into_any(),
        Some(session) => {
            let user = session.user;
            let profile = ProfileView::for_user(&user);
            view! {
                <div class="profile-page">
                    <header class="profile-header">
                        <h2>{profile.heading}</h2>
                        <span class="role-label">{profile.role_label}</span>
                        <div class="profile-badges">
                            {profile.badges.into_iter().map(|badge| view! {
                                <span class="profile-badge">{badge.label()}</span>
                            }).collect_view()}
                        </div>
                    </header>
                    {profile.sections.into_iter().map(|section| {
                        let body = section_body(section, &user);
                        view! {
                            <section class="profile-section">
                                <h3>{section.title()}</h3>
                                <p>{body}</p>
                            </section>
                        }
                    }).collect_view()}
                </div>
            }.into_any()
        }
    }
}

//! Login Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Page};
use crate::store::{store_sign_in, use_app_store};

#[component]
pub fn LoginForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email = email.get().trim().to_string();
        let password = password.get();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }

        set_error.set(None);
        set_submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::login(&config, &email, &password).await {
                Ok(session) => {
                    store_sign_in(&store, session);
                    ctx.navigate(Page::Profile);
                }
                Err(e) => {
                    log::warn!("[Login] failed for {}: {}", email, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="login-form" on:submit=on_submit>
            <h2>"Sign in"</h2>

            {move || error.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

            <label>
                "Email"
                <input
                    type="email"
                    autocomplete="username"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Password"
                <input
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />
            </label>

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
            </button>
            <p class="form-switch">
                "New here? "
                <a href="#" on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(Page::Register);
                }>"Create an account"</a>
            </p>
        </form>
    }
}

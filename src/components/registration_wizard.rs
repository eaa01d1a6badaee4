//! Registration Wizard
//!
//! Multi-step sign-up for individuals, NGOs and volunteers. Each step is
//! validated before moving on; server-side field errors jump back to the
//! step that owns the field.

use gloo_timers::future::TimeoutFuture;
use helpbridge_core::registration::{
    build_payload, steps, validate_field, validate_step, Field, FieldErrors, MultiField, RegistrationForm,
};
use helpbridge_core::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, Page};
use crate::store::{store_sign_in, use_app_store};

/// Index of the first step owning one of the errored fields
fn first_step_with_errors(role: Role, errors: &FieldErrors) -> Option<usize> {
    steps(role).iter().position(|step| {
        step.fields.iter().any(|f| errors.contains_key(f.param()))
            || step.multi.iter().any(|m| errors.contains_key(m.param()))
    })
}

/// Label/value rows for the review step. Passwords are left out.
fn review_rows(role: Role, form: &RegistrationForm) -> Vec<(&'static str, String)> {
    let mut rows = Vec::new();
    for step in steps(role) {
        for field in step.fields {
            if matches!(field, Field::Password | Field::ConfirmPassword) {
                continue;
            }
            rows.push((field.label(), form.get(*field).trim().to_string()));
        }
        for multi in step.multi {
            rows.push((multi.label(), form.selected(*multi).join(", ")));
        }
    }
    rows
}

#[component]
fn TextField(field: Field, form: RwSignal<RegistrationForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let param = field.param();

    view! {
        <label class="form-field">
            <span class="field-label">
                {field.label()}
                {(!field.is_required()).then(|| view! { <span class="optional">" (optional)"</span> })}
            </span>
            <input
                type=field.input_type()
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| f.set(field, value));
                    errors.update(|e| { e.remove(param); });
                }
                on:blur=move |_| {
                    if let Some(msg) = form.with(|f| validate_field(field, f)) {
                        errors.update(|e| { e.insert(param.to_string(), msg); });
                    }
                }
            />
            {move || errors.with(|e| e.get(param).cloned()).map(|msg| view! {
                <span class="field-error">{msg}</span>
            })}
        </label>
    }
}

#[component]
fn MultiSelect(field: MultiField, form: RwSignal<RegistrationForm>, errors: RwSignal<FieldErrors>) -> impl IntoView {
    let param = field.param();

    view! {
        <fieldset class="form-field multi-select">
            <legend>{field.label()}</legend>
            <div class="multi-options">
                {field.options().iter().map(|option| {
                    let option: &'static str = option;
                    view! {
                        <button
                            type="button"
                            class=move || if form.with(|f| f.is_selected(field, option)) { "option-btn active" } else { "option-btn" }
                            on:click=move |_| {
                                form.update(|f| f.toggle_multi(field, option));
                                errors.update(|e| { e.remove(param); });
                            }
                        >
                            {option}
                        </button>
                    }
                }).collect_view()}
            </div>
            {move || errors.with(|e| e.get(param).cloned()).map(|msg| view! {
                <span class="field-error">{msg}</span>
            })}
        </fieldset>
    }
}

#[component]
pub fn RegistrationWizard() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let role = RwSignal::new(None::<Role>);
    let step = RwSignal::new(0usize);
    let form = RwSignal::new(RegistrationForm::new());
    let errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let done = RwSignal::new(false);

    let choose_role = move |r: Role| {
        role.set(Some(r));
        step.set(0);
        form.set(RegistrationForm::new());
        errors.set(FieldErrors::new());
        banner.set(None);
    };

    let is_last_step = move || {
        role.get()
            .map(|r| step.get() + 1 >= steps(r).len())
            .unwrap_or(false)
    };

    let go_back = move |_| {
        banner.set(None);
        if step.get() == 0 {
            role.set(None);
        } else {
            step.update(|s| *s -= 1);
        }
    };

    let go_next = move |_| {
        let Some(r) = role.get() else { return };
        let current = step.get();
        let step_errors = form.with(|f| validate_step(r, current, f));
        if step_errors.is_empty() {
            errors.set(FieldErrors::new());
            step.set(current + 1);
        } else {
            log::debug!("[Register] step {} has {} invalid fields", current, step_errors.len());
            errors.set(step_errors);
        }
    };

    let submit = move |_| {
        let Some(r) = role.get() else { return };
        let payload = match form.with(|f| build_payload(r, f)) {
            Ok(payload) => payload,
            Err(field_errors) => {
                if let Some(i) = first_step_with_errors(r, &field_errors) {
                    step.set(i);
                }
                errors.set(field_errors);
                banner.set(Some("Some details are missing or invalid".to_string()));
                return;
            }
        };

        banner.set(None);
        submitting.set(true);
        let config = ctx.config();
        spawn_local(async move {
            match api::register(&config, &payload).await {
                Ok(session) => {
                    store_sign_in(&store, session);
                    submitting.set(false);
                    done.set(true);
                    TimeoutFuture::new(config.redirect_delay_ms).await;
                    ctx.navigate(Page::Profile);
                }
                Err(e) => {
                    log::warn!("[Register] rejected: {}", e);
                    let field_errors = e.field_errors();
                    if let Some(i) = first_step_with_errors(r, &field_errors) {
                        step.set(i);
                    }
                    errors.set(field_errors);
                    banner.set(Some(e.to_string()));
                    submitting.set(false);
                }
            }
        });
    };

    let step_content = move || {
        let r = role.get()?;
        let current = *steps(r).get(step.get())?;
        let review = current.fields.is_empty() && current.multi.is_empty();

        Some(view! {
            <div class="wizard-step">
                <h3>{current.title}</h3>
                {current.fields.iter().map(|field| view! {
                    <TextField field=*field form=form errors=errors />
                }).collect_view()}
                {current.multi.iter().map(|field| view! {
                    <MultiSelect field=*field form=form errors=errors />
                }).collect_view()}
                {review.then(|| view! {
                    <dl class="review-list">
                        {form.with(|f| review_rows(r, f)).into_iter().map(|(label, value)| view! {
                            <dt>{label}</dt>
                            <dd>{if value.is_empty() { "—".to_string() } else { value }}</dd>
                        }).collect_view()}
                    </dl>
                })}
            </div>
        })
    };

    view! {
        <div class="registration-wizard">
            <h2>"Create your account"</h2>

            {move || banner.get().map(|msg| view! { <div class="error-banner">{msg}</div> })}

            <Show
                when=move || !done.get()
                fallback=|| view! {
                    <div class="success-banner">"Registration successful! Redirecting to your profile..."</div>
                }
            >
                <Show
                    when=move || role.get().is_some()
                    fallback=move || view! {
                        <div class="role-picker">
                            <p>"I want to join as"</p>
                            {Role::REGISTERABLE.into_iter().map(|r| view! {
                                <button class="role-btn" on:click=move |_| choose_role(r)>{r.label()}</button>
                            }).collect_view()}
                        </div>
                    }
                >
                    <ol class="wizard-progress">
                        {move || role.get().map(|r| {
                            steps(r).iter().enumerate().map(|(i, s)| view! {
                                <li class={move || if step.get() == i { "active" } else if step.get() > i { "done" } else { "" }}>
                                    {s.title}
                                </li>
                            }).collect_view()
                        })}
                    </ol>

                    {step_content}

                    <div class="wizard-actions">
                        <button type="button" class="back-btn" on:click=go_back>
                            {move || if step.get() == 0 { "Change role" } else { "Back" }}
                        </button>
                        <Show
                            when=is_last_step
                            fallback=move || view! {
                                <button type="button" class="next-btn" on:click=go_next>"Next"</button>
                            }
                        >
                            <button
                                type="button"
                                class="submit-btn"
                                disabled=move || submitting.get()
                                on:click=submit
                            >
                                {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                            </button>
                        </Show>
                    </div>
                </Show>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_step_with_errors() {
        let mut errors = FieldErrors::new();
        errors.insert("pincode".to_string(), "Pincode must be 6 digits".to_string());
        assert_eq!(first_step_with_errors(Role::Individual, &errors), Some(1));
        assert_eq!(first_step_with_errors(Role::Volunteer, &errors), Some(2));

        errors.insert("email".to_string(), "Email already registered".to_string());
        assert_eq!(first_step_with_errors(Role::Ngo, &errors), Some(1));
        assert_eq!(first_step_with_errors(Role::Individual, &errors), Some(0));
    }

    #[test]
    fn test_unknown_param_has_no_step() {
        let mut errors = FieldErrors::new();
        errors.insert("role".to_string(), "Invalid role".to_string());
        assert_eq!(first_step_with_errors(Role::Ngo, &errors), None);
    }

    #[test]
    fn test_review_rows_hide_passwords() {
        let mut form = RegistrationForm::new();
        form.set(Field::FullName, " Ravi ");
        form.set(Field::Password, "hunter22hunter");
        form.toggle_multi(MultiField::Skills, "Driving");
        form.toggle_multi(MultiField::Skills, "Cooking");

        let rows = review_rows(Role::Volunteer, &form);
        assert!(rows.iter().all(|(label, _)| !label.contains("assword")));
        assert!(rows.contains(&("Full name", "Ravi".to_string())));
        assert!(rows.contains(&("Skills", "Cooking, Driving".to_string())));
    }
}

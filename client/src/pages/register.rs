//! Registration page for new members.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validates the form locally, then posts through `SessionStore::register`.
//! The store requests navigation to `/login` on success; failures render
//! inline with the server's message.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::{Registration, Route, SessionStore};

/// Raw field values as typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    full_name: String,
    email: String,
    profile_details: String,
    password: String,
    confirm_password: String,
}

/// Loose shape check: one `@`, non-empty local part, dotted domain.
fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !email.chars().any(char::is_whitespace)
}

/// Validate in form order, returning the first failing field's message.
fn validate_registration(form: &RegisterForm) -> Result<Registration, &'static str> {
    if form.full_name.trim().is_empty() {
        return Err("Please enter your full name!");
    }
    let email = form.email.trim();
    if email.is_empty() {
        return Err("Please enter your email!");
    }
    if !looks_like_email(email) {
        return Err("Please enter a valid email!");
    }
    if form.profile_details.trim().is_empty() {
        return Err("Please enter your profile details!");
    }
    if form.password.is_empty() {
        return Err("Please enter your password!");
    }
    if form.confirm_password.is_empty() {
        return Err("Please confirm your password!");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match!");
    }
    Ok(Registration::from_full_name(&form.full_name, email, &form.password, &form.profile_details))
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);
    let info = RwSignal::new(None::<(bool, String)>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration(&form.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(Some((false, message.to_owned())));
                return;
            }
        };
        busy.set(true);
        info.set(None);

        let store = store.clone();
        leptos::task::spawn_local(async move {
            match store.register(&registration).await {
                Ok(()) => info.try_set(Some((true, "Registration successful!".to_owned()))),
                Err(e) => info.try_set(Some((false, e.to_string()))),
            };
            busy.try_set(false);
        });
    };

    let field = move |placeholder: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| set(f, value));
                }
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__hero">
                <h2>"Welcome to AHH"</h2>
                <p>"Empowering organizations with modern solutions"</p>
            </div>
            <div class="auth-card auth-card--wide">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Join AHH today"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full Name", "text", |f| f.full_name.clone(), |f, v| f.full_name = v)}
                    {field("Email Address", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field(
                        "Profile Details (e.g., Experienced entrepreneur in healthcare)",
                        "text",
                        |f| f.profile_details.clone(),
                        |f, v| f.profile_details = v,
                    )}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("Confirm Password", "password", |f| f.confirm_password.clone(), |f, v| f.confirm_password = v)}
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                {move || {
                    info.get()
                        .map(|(ok, text)| {
                            let class = if ok { "auth-message" } else { "auth-message auth-message--error" };
                            view! { <p class=class>{text}</p> }
                        })
                }}
                <p class="auth-card__footer">
                    "Already have an account? "
                    <A href=Route::Login.path()>"Login"</A>
                </p>
            </div>
        </div>
    }
}

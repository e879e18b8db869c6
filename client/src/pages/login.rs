//! Login page: email + password against the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting hands credentials to `SessionStore::login`. Navigation on
//! success is driven by the store's `Navigate` event, so this page only renders
//! the inline error and the in-flight state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use session::{Credentials, Route, SessionStore};

use crate::state::auth::AuthState;

/// Trim and require both login fields, returning the first missing-field message.
fn validate_login_input(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Please enter your email!");
    }
    if password.is_empty() {
        return Err("Please enter your password!");
    }
    Ok(Credentials::new(email, password))
}

fn submit_label(loading: bool) -> &'static str {
    if loading { "Logging in..." } else { "Login" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let loading = move || auth.with(AuthState::loading);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);

        let store = store.clone();
        leptos::task::spawn_local(async move {
            if let Err(e) = store.login(&credentials).await {
                error.set(Some(e.to_string()));
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__hero">
                <h2>"Welcome to AHH"</h2>
                <p>"Empowering organizations with modern solutions"</p>
            </div>
            <div class="auth-card">
                <h1>"Welcome Back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=loading>
                        {move || submit_label(loading())}
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=Route::Register.path()>"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

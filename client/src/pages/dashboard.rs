//! Dashboard shell and role-specific landing view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `DashboardShell` is the guarded parent route: sidebar plus an outlet for
//! sections. `DashboardHome` fetches the role's summary endpoint through the
//! authenticated API client and lists its figures.
//!
//! ERROR HANDLING
//! ==============
//! An expired token is handled inside `ApiClient` (logout + redirect), so this
//! page only renders other failures as an inline message.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use serde_json::Value;
use session::menu::label_for;
use session::{ApiError, Route, SessionStore};

use crate::components::protected_route::ProtectedRoute;
use crate::components::sidebar::Sidebar;
use crate::state::auth::AuthState;

/// `total_mentees` -> `Total mentees`.
fn humanize_key(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => Some(items.len().to_string()),
        Value::Null | Value::Object(_) => None,
    }
}

fn collect_stats(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    let Value::Object(map) = value else {
        return;
    };
    for (key, child) in map {
        let label = if prefix.is_empty() { humanize_key(key) } else { format!("{prefix} {}", key.replace('_', " ")) };
        match child {
            Value::Object(_) => collect_stats(&label, child, out),
            other => {
                if let Some(text) = scalar_text(other) {
                    out.push((label, text));
                }
            }
        }
    }
}

/// Flatten a dashboard summary into label/value rows.
///
/// Uses the `stats` object when present, otherwise the whole body; nested
/// objects are prefixed with their parent key and arrays report their length.
fn summary_stats(body: &Value) -> Vec<(String, String)> {
    let source = match body.get("stats") {
        Some(stats @ Value::Object(_)) => stats,
        _ => body,
    };
    let mut out = Vec::new();
    collect_stats("", source, &mut out);
    out
}

fn summary_error_message(err: &ApiError) -> Option<String> {
    match err {
        ApiError::Expired => None,
        other => Some(format!("Failed to load dashboard: {other}")),
    }
}

#[component]
pub fn DashboardShell() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <div class="dashboard-layout">
                <Sidebar/>
                <main class="dashboard-layout__content">
                    <Outlet/>
                </main>
            </div>
        </ProtectedRoute>
    }
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = auth.with_untracked(AuthState::role);

    let stats = RwSignal::new(None::<Vec<(String, String)>>);
    let error = RwSignal::new(None::<String>);

    let api = store.api();
    leptos::task::spawn_local(async move {
        match api.get::<Value>(role.dashboard_endpoint()).await {
            Ok(body) => {
                stats.try_set(Some(summary_stats(&body)));
            }
            Err(e) => {
                error.try_set(summary_error_message(&e));
            }
        }
    });

    let title = label_for(role, Route::Dashboard).unwrap_or("Dashboard");
    let greeting = move || {
        auth.with(|state| state.identity().map(|identity| format!("Welcome, {}", identity.first_name)).unwrap_or_default())
    };

    view! {
        <section class="dashboard-home">
            <h1>{title}</h1>
            <p class="dashboard-home__greeting">{greeting}</p>
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="dashboard-home__error">{message}</p> }.into_any();
                }
                match stats.get() {
                    None => view! { <p class="dashboard-home__loading">"Loading..."</p> }.into_any(),
                    Some(rows) if rows.is_empty() => {
                        view! { <p class="dashboard-home__empty">"No figures yet."</p> }.into_any()
                    }
                    Some(rows) => view! {
                        <dl class="dashboard-home__stats">
                            {rows
                                .into_iter()
                                .map(|(label, value)| view! {
                                    <div class="stat">
                                        <dt>{label}</dt>
                                        <dd>{value}</dd>
                                    </div>
                                })
                                .collect_view()}
                        </dl>
                    }
                    .into_any(),
                }
            }}
        </section>
    }
}

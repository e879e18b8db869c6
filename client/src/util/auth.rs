//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! The decision itself comes from `session::evaluate`; these helpers turn it
//! into router navigation and placeholder text.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use session::{GuardDecision, Route, evaluate};

use crate::state::auth::AuthState;

/// Shown while restoration is still settling.
pub const LOADING_MESSAGE: &str = "Loading...";
/// Shown for the instant between a failed guard check and the redirect.
pub const REDIRECTING_MESSAGE: &str = "Redirecting to login...";

/// Where the guard wants to send the user, if anywhere.
pub fn redirect_target(state: &AuthState) -> Option<(Route, bool)> {
    match evaluate(&state.snapshot) {
        GuardDecision::Redirect { to, replace } => Some((to, replace)),
        GuardDecision::Pending | GuardDecision::Allow => None,
    }
}

/// Placeholder text for a guarded subtree that cannot render yet.
pub fn guard_message(decision: GuardDecision) -> Option<&'static str> {
    match decision {
        GuardDecision::Pending => Some(LOADING_MESSAGE),
        GuardDecision::Redirect { .. } => Some(REDIRECTING_MESSAGE),
        GuardDecision::Allow => None,
    }
}

/// Redirect to `/login` whenever restoration has settled and no session is present.
pub fn install_guard_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = auth.get();
        if let Some((route, replace)) = redirect_target(&state) {
            navigate(route.path(), NavigateOptions { replace, ..NavigateOptions::default() });
        }
    });
}

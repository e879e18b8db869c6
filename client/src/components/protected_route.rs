//! Guard wrapper for routes that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the session guard's decision: a waiting indicator while the
//! persisted session is restored, a redirect notice (with replace-navigation
//! to `/login`) when nobody is signed in, or the wrapped children.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{GuardDecision, evaluate};

use crate::state::auth::AuthState;
use crate::util::auth::{guard_message, install_guard_redirect};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_guard_redirect(auth, use_navigate());

    let decision = Memo::new(move |_| auth.with(|state| evaluate(&state.snapshot)));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! { <div class="guard-placeholder">{move || guard_message(decision.get()).unwrap_or_default()}</div> }
            }
        >
            {children()}
        </Show>
    }
}

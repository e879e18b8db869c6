//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::hooks::use_navigate;
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};
use session::{SessionStore, SystemClock};

use crate::config::api_base_url;
use crate::net::api::GlooTransport;
use crate::pages::{
    dashboard::{DashboardHome, DashboardShell},
    home::HomePage,
    login::LoginPage,
    register::RegisterPage,
    section::SectionPage,
};
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Build the session store for the browser: `localStorage`, fetch, `Date.now()`.
fn browser_store() -> SessionStore {
    SessionStore::new(
        Arc::new(BrowserStorage),
        Arc::new(GlooTransport::new(api_base_url())),
        Arc::new(SystemClock),
    )
}

/// Root application component.
///
/// Provides the session store and its reactive mirror, restores any persisted
/// session once mounted, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = browser_store();
    let auth = RwSignal::new(AuthState::from_snapshot(store.snapshot()));

    let subscription = store.subscribe(move |event| {
        auth.try_update(|state| state.apply(event));
    });
    {
        let store = store.clone();
        on_cleanup(move || {
            store.unsubscribe(subscription);
        });
    }

    provide_context(store.clone());
    provide_context(auth);

    // Reads no signals, so this runs exactly once after mount.
    Effect::new(move || {
        let snapshot = store.restore();
        leptos::logging::log!("session restored: authenticated={}", snapshot.is_authenticated());
    });

    view! {
        <Title text="AHH Mentorship"/>

        <Router>
            <SessionNavigator/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardShell>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=ParamSegment("section") view=SectionPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Applies navigation requested by the session store (after login, logout,
/// registration, or expiry) through the router.
#[component]
fn SessionNavigator() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth.with(|state| state.pending_navigation.is_none()) {
            return;
        }
        if let Some(route) = auth.try_update(AuthState::take_navigation).flatten() {
            navigate(route.path(), NavigateOptions::default());
        }
    });
}

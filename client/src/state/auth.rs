//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mirrors the session store into a Leptos signal. Route guards, the sidebar,
//! and the auth forms read it; only store events write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use session::{Identity, Role, Route, SessionEvent, SessionSnapshot};

/// Reactive copy of the session store plus any navigation it requested.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub snapshot: SessionSnapshot,
    /// Navigation requested by the store and not yet applied by the router.
    pub pending_navigation: Option<Route>,
}

impl AuthState {
    #[must_use]
    pub fn from_snapshot(snapshot: SessionSnapshot) -> Self {
        Self { snapshot, pending_navigation: None }
    }

    /// Fold a store event into this state.
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Changed(snapshot) => self.snapshot = snapshot.clone(),
            SessionEvent::Navigate(route) => self.pending_navigation = Some(*route),
        }
    }

    /// Take the pending navigation, leaving none behind.
    pub fn take_navigation(&mut self) -> Option<Route> {
        self.pending_navigation.take()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.snapshot.identity()
    }

    /// Role for menu selection; signed-out users see the member menu.
    #[must_use]
    pub fn role(&self) -> Role {
        self.identity().map(|identity| identity.role).unwrap_or_default()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.snapshot.loading
    }
}

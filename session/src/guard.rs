//! Route guard for authenticated sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect behavior.
//! The decision is a pure function of the snapshot; the caller renders it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::Route;
use crate::store::SessionSnapshot;

/// What a guarded subtree should do for the current session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Restoration has not settled; show a waiting indicator and stay put.
    Pending,
    /// No session; navigate away, replacing the current history entry when
    /// `replace` is set.
    Redirect { to: Route, replace: bool },
    /// Session present; render the subtree.
    Allow,
}

/// Evaluate the guard for `snapshot`.
#[must_use]
pub fn evaluate(snapshot: &SessionSnapshot) -> GuardDecision {
    if !snapshot.restored {
        return GuardDecision::Pending;
    }
    if snapshot.token().is_none() {
        return GuardDecision::Redirect { to: Route::Login, replace: true };
    }
    GuardDecision::Allow
}

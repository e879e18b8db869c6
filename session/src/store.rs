//! Session store: the single authority for authentication state.
//!
//! ARCHITECTURE
//! ============
//! One [`SessionStore`] is built at startup and handed to whatever needs
//! session state (Leptos context in the browser, the command runner in the
//! CLI). Clones share state. Every mutation writes persisted storage under
//! the same lock as the in-memory update, then publishes a
//! [`SessionEvent::Changed`] snapshot to subscribers. Navigation requests are
//! published as [`SessionEvent::Navigate`] so the store never touches a router.
//!
//! TRADE-OFFS
//! ==========
//! Logins are not deduplicated; `loading` lets the UI block resubmission.
//! Each login and logout advances an epoch, and a login response is only
//! applied if its epoch is still current. A response that lands after a
//! logout (or after a newer login started) is dropped instead of resurrecting
//! cleared credentials.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::clock::Clock;
use crate::error::{AuthError, TransportError};
use crate::http::ApiClient;
use crate::routes::Route;
use crate::storage::{self, PersistedEntries, SessionStorage};
use crate::token;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};
use crate::types::{Credentials, Identity, LoginResponse, Registration, error_message};

const LOGIN_PATH: &str = "/auth/login";
const SIGNUP_PATH: &str = "/auth/signup";

const INVALID_CREDENTIALS: &str = "Invalid credentials";
const REGISTRATION_FAILED: &str = "Registration failed.";

/// An authenticated session. Token and identity always travel together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub identity: Identity,
}

/// Read-only view of the store's state at one point in time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    /// Set once the startup restoration attempt has settled; never cleared.
    pub restored: bool,
    /// True while at least one login request is outstanding.
    pub loading: bool,
}

impl SessionSnapshot {
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.session.as_ref().map(|s| &s.identity)
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Notification delivered to subscribers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// State changed; carries the new snapshot.
    Changed(SessionSnapshot),
    /// The application should move to this route.
    Navigate(Route),
}

/// Handle returned by [`SessionStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

#[derive(Default)]
struct State {
    session: Option<Session>,
    restored: bool,
    pending_logins: usize,
    epoch: u64,
}

impl State {
    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot { session: self.session.clone(), restored: self.restored, loading: self.pending_logins > 0 }
    }
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Subscriber)>,
}

struct Inner {
    storage: Arc<dyn SessionStorage>,
    transport: Arc<dyn Transport>,
    clock: Arc<dyn Clock>,
    state: Mutex<State>,
    subscribers: Mutex<Subscribers>,
}

/// Outcome of reading persisted entries at startup.
#[derive(Debug, PartialEq, Eq)]
enum Restoration {
    Empty,
    Restored(Session),
    Discard(&'static str),
}

/// Shared, cloneable handle to the session state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore").field("snapshot", &self.snapshot()).finish_non_exhaustive()
    }
}

impl SessionStore {
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>, transport: Arc<dyn Transport>, clock: Arc<dyn Clock>) -> Self {
        Self {
            inner: Arc::new(Inner {
                storage,
                transport,
                clock,
                state: Mutex::new(State::default()),
                subscribers: Mutex::new(Subscribers::default()),
            }),
        }
    }

    // =========================================================================
    // READ ACCESS
    // =========================================================================

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        self.state().snapshot()
    }

    /// Current in-memory bearer token.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state().session.as_ref().map(|s| s.token.clone())
    }

    #[must_use]
    pub fn identity(&self) -> Option<Identity> {
        self.state().session.as_ref().map(|s| s.identity.clone())
    }

    #[must_use]
    pub fn is_restored(&self) -> bool {
        self.state().restored
    }

    /// HTTP client that authenticates requests with this store's token.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::new(self.clone())
    }

    pub(crate) fn transport(&self) -> &dyn Transport {
        self.inner.transport.as_ref()
    }

    pub(crate) fn now_unix_secs(&self) -> f64 {
        self.inner.clock.now_unix_secs()
    }

    // =========================================================================
    // SUBSCRIPTIONS
    // =========================================================================

    /// Register an observer for state changes and navigation requests.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SessionEvent) + Send + Sync + 'static,
    {
        let mut subs = self.subscribers();
        let id = SubscriptionId(subs.next_id);
        subs.next_id += 1;
        subs.entries.push((id, Arc::new(callback)));
        id
    }

    /// Remove an observer. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subs = self.subscribers();
        let before = subs.entries.len();
        subs.entries.retain(|(entry_id, _)| *entry_id != id);
        subs.entries.len() != before
    }

    fn publish(&self, events: &[SessionEvent]) {
        // Callbacks run without any store lock held so they may call back in.
        let callbacks: Vec<Subscriber> = self.subscribers().entries.iter().map(|(_, cb)| cb.clone()).collect();
        for event in events {
            for callback in &callbacks {
                callback(event);
            }
        }
    }

    // =========================================================================
    // OPERATIONS
    // =========================================================================

    /// Rebuild the session from persisted storage. Runs once; later calls
    /// (and calls after a successful login) return the current snapshot
    /// unchanged.
    pub fn restore(&self) -> SessionSnapshot {
        let snapshot = {
            let mut state = self.state();
            if state.restored {
                tracing::debug!("session already restored; ignoring repeat restore");
                return state.snapshot();
            }

            let entries = storage::read_entries(self.inner.storage.as_ref());
            state.session = match decode_persisted(entries, self.now_unix_secs()) {
                Restoration::Empty => None,
                Restoration::Restored(session) => {
                    tracing::info!(user_id = session.identity.id, role = %session.identity.role, "session restored");
                    Some(session)
                }
                Restoration::Discard(reason) => {
                    tracing::info!(reason, "discarding persisted session");
                    storage::clear_entries(self.inner.storage.as_ref());
                    None
                }
            };
            state.restored = true;
            state.snapshot()
        };
        self.publish(&[SessionEvent::Changed(snapshot.clone())]);
        snapshot
    }

    /// Exchange credentials for a session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] whose `Display` is the message to show the
    /// user. The session is untouched on every error path except
    /// [`AuthError::Storage`], which leaves it empty.
    pub async fn login(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let epoch = {
            let mut state = self.state();
            state.epoch += 1;
            state.pending_logins += 1;
            state.epoch
        };
        self.publish(&[SessionEvent::Changed(self.snapshot())]);

        let body = serde_json::json!({ "email": credentials.email, "password": credentials.password });
        let outcome = self
            .inner
            .transport
            .send(ApiRequest::new(Method::Post, LOGIN_PATH).with_body(body))
            .await;
        let response = interpret_login(outcome);

        let (result, snapshot) = {
            let mut state = self.state();
            state.pending_logins = state.pending_logins.saturating_sub(1);
            let result = match response {
                Ok(_) if state.epoch != epoch => Err(AuthError::Superseded),
                Ok(login) => self.apply_login(&mut state, login),
                Err(e) => Err(e),
            };
            (result, state.snapshot())
        };

        match &result {
            Ok(identity) => {
                tracing::info!(user_id = identity.id, role = %identity.role, "login succeeded");
                self.publish(&[SessionEvent::Changed(snapshot), SessionEvent::Navigate(Route::Dashboard)]);
            }
            Err(e) => {
                tracing::warn!(error = %e, "login failed");
                self.publish(&[SessionEvent::Changed(snapshot)]);
            }
        }
        result
    }

    fn apply_login(&self, state: &mut State, login: LoginResponse) -> Result<Identity, AuthError> {
        let user_json = serde_json::to_string(&login.user).map_err(|e| {
            tracing::error!(error = %e, "failed to serialize identity");
            AuthError::Storage
        })?;
        if let Err(e) = storage::write_entries(self.inner.storage.as_ref(), &login.access_token, &user_json) {
            tracing::error!(error = %e, "failed to persist session");
            state.session = None;
            return Err(AuthError::Storage);
        }
        let identity = login.user.clone();
        state.session = Some(Session { token: login.access_token, identity: login.user });
        // A fresh login supersedes whatever restoration would have found.
        state.restored = true;
        Ok(identity)
    }

    /// Clear the session everywhere and ask for the login screen. Safe to
    /// call without an active session.
    pub fn logout(&self) {
        self.clear_session("logout");
    }

    /// Drop a session whose token was found expired outside restoration.
    pub fn expire(&self) {
        self.clear_session("token expired");
    }

    fn clear_session(&self, reason: &'static str) {
        let (had_session, snapshot) = {
            let mut state = self.state();
            state.epoch += 1;
            storage::clear_entries(self.inner.storage.as_ref());
            let had_session = state.session.take().is_some();
            (had_session, state.snapshot())
        };
        tracing::info!(reason, had_session, "session cleared");
        self.publish(&[SessionEvent::Changed(snapshot), SessionEvent::Navigate(Route::Login)]);
    }

    /// Create an account. Does not sign in; on success the user is sent to
    /// the login screen.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] whose `Display` is the message to show the user.
    pub async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        let body = serde_json::to_value(registration).map_err(|e| {
            tracing::error!(error = %e, "failed to serialize registration");
            AuthError::UnexpectedResponse
        })?;
        let outcome = self
            .inner
            .transport
            .send(ApiRequest::new(Method::Post, SIGNUP_PATH).with_body(body))
            .await;

        match outcome {
            Ok(response) if response.is_success() => {
                tracing::info!(email = %registration.email, "registration succeeded");
                self.publish(&[SessionEvent::Navigate(Route::Login)]);
                Ok(())
            }
            Ok(response) => {
                let message = error_message(&response.body).unwrap_or_else(|| REGISTRATION_FAILED.to_owned());
                tracing::warn!(status = response.status, %message, "registration rejected");
                Err(AuthError::Rejected(message))
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration request failed");
                Err(AuthError::Network)
            }
        }
    }

    // =========================================================================
    // LOCKS
    // =========================================================================

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn subscribers(&self) -> MutexGuard<'_, Subscribers> {
        self.inner.subscribers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Decide what persisted entries mean at `now`.
fn decode_persisted(entries: PersistedEntries, now: f64) -> Restoration {
    match (entries.token, entries.user) {
        (None, None) => Restoration::Empty,
        (Some(_), None) | (None, Some(_)) => Restoration::Discard("incomplete persisted session"),
        (Some(token), Some(user)) => {
            if token::is_expired(&token, now) {
                return Restoration::Discard("persisted token expired or undecodable");
            }
            match serde_json::from_str::<Identity>(&user) {
                Ok(identity) => Restoration::Restored(Session { token, identity }),
                Err(_) => Restoration::Discard("persisted identity is malformed"),
            }
        }
    }
}

/// Map a login exchange to either a session payload or a user-facing error.
fn interpret_login(outcome: Result<ApiResponse, TransportError>) -> Result<LoginResponse, AuthError> {
    let response = outcome.map_err(|e| {
        tracing::warn!(error = %e, "login request failed");
        AuthError::Network
    })?;
    if !response.is_success() {
        let message = error_message(&response.body).unwrap_or_else(|| INVALID_CREDENTIALS.to_owned());
        return Err(AuthError::Rejected(message));
    }
    serde_json::from_value::<LoginResponse>(response.body).map_err(|e| {
        tracing::warn!(error = %e, "login response missing token or user");
        AuthError::UnexpectedResponse
    })
}

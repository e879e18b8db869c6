//! Session core shared by the web client and the CLI.
//!
//! This crate owns authentication state for the mentorship platform: the
//! bearer-token expiry check, the session store (restore/login/logout/register),
//! the route guard, role menus, and the HTTP client that attaches credentials
//! to outbound requests. It holds no browser or network code of its own;
//! storage, transport, and time are injected through the traits in
//! [`storage`], [`transport`], and [`clock`].

pub mod clock;
pub mod error;
pub mod guard;
pub mod http;
pub mod menu;
pub mod role;
pub mod routes;
pub mod storage;
pub mod store;
pub mod token;
pub mod transport;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ApiError, AuthError, StorageError, TokenError, TransportError};
pub use guard::{GuardDecision, evaluate};
pub use http::ApiClient;
pub use role::Role;
pub use routes::Route;
pub use storage::{MemoryStorage, SessionStorage};
pub use store::{Session, SessionEvent, SessionSnapshot, SessionStore, SubscriptionId};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};
pub use types::{Credentials, Identity, Registration};

#[cfg(test)]
#[path = "test_support.rs"]
pub(crate) mod test_support;

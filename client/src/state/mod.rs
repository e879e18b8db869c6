//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session store is the source of truth; `auth` holds the reactive copy
//! that components subscribe to.

pub mod auth;
